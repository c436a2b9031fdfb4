//! Task management commands
//!
//! Returned tasks carry their current timer state.

use clientdesk_domain::{NewTask, RecordId, Result, Task, TaskChanges, TaskStatus};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn list_tasks(ctx: &AppContext) -> Result<Vec<Task>> {
    execute_command("tasks::list_tasks", || ctx.tasks.get_all()).await
}

pub async fn get_task(ctx: &AppContext, id: RecordId) -> Result<Task> {
    execute_command("tasks::get_task", || ctx.tasks.get_by_id(id)).await
}

pub async fn create_task(ctx: &AppContext, task: NewTask) -> Result<Task> {
    execute_command("tasks::create_task", || ctx.tasks.create(task)).await
}

pub async fn update_task(ctx: &AppContext, id: RecordId, changes: TaskChanges) -> Result<Task> {
    execute_command("tasks::update_task", || ctx.tasks.update(id, changes)).await
}

pub async fn update_task_status(ctx: &AppContext, id: RecordId, status: TaskStatus) -> Result<Task> {
    execute_command("tasks::update_task_status", || ctx.tasks.update_status(id, status)).await
}

/// Delete a task and its tracked time.
pub async fn delete_task(ctx: &AppContext, id: RecordId) -> Result<()> {
    execute_command("tasks::delete_task", || ctx.tasks.delete(id)).await
}
