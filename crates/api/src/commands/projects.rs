//! Project management commands

use clientdesk_domain::{NewProject, Project, ProjectChanges, RecordId, Result};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn list_projects(ctx: &AppContext) -> Result<Vec<Project>> {
    execute_command("projects::list_projects", || ctx.projects.get_all()).await
}

pub async fn get_project(ctx: &AppContext, id: RecordId) -> Result<Project> {
    execute_command("projects::get_project", || ctx.projects.get_by_id(id)).await
}

pub async fn create_project(ctx: &AppContext, project: NewProject) -> Result<Project> {
    execute_command("projects::create_project", || ctx.projects.create(project)).await
}

pub async fn update_project(
    ctx: &AppContext,
    id: RecordId,
    changes: ProjectChanges,
) -> Result<Project> {
    execute_command("projects::update_project", || ctx.projects.update(id, changes)).await
}

pub async fn delete_project(ctx: &AppContext, id: RecordId) -> Result<()> {
    execute_command("projects::delete_project", || ctx.projects.delete(id)).await
}
