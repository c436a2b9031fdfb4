//! Project accessor

use std::sync::Arc;

use clientdesk_domain::constants::{PROJECT_FIELDS, PROJECT_ORDER_FIELD};
use clientdesk_domain::{
    DeleteParams, NewProject, Project, ProjectChanges, RecordId, Result, SortOrder, Table,
    WriteParams,
};
use tracing::{debug, info, instrument};

use super::{decode, decode_all, fetch_params, field_params};
use crate::store::RecordStore;

/// CRUD for project records, latest start date first
pub struct ProjectAccessor {
    store: Arc<dyn RecordStore>,
}

impl ProjectAccessor {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Project>> {
        let params = fetch_params(PROJECT_FIELDS, PROJECT_ORDER_FIELD, SortOrder::Desc);
        let records = self.store.fetch_records(Table::Project, &params).await?.into_records()?;
        debug!(count = records.len(), "fetched projects");
        decode_all(records)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: RecordId) -> Result<Project> {
        let response =
            self.store.get_record_by_id(Table::Project, id, &field_params(PROJECT_FIELDS)).await?;
        decode(response.into_record(Table::Project, id)?)
    }

    /// Create a project; status defaults to `planning`.
    #[instrument(skip(self, project), fields(name = %project.name))]
    pub async fn create(&self, project: NewProject) -> Result<Project> {
        let params = WriteParams::single(&project.into_fields())?;
        let record = self
            .store
            .create_record(Table::Project, &params)
            .await?
            .into_first_record("create project")?;
        let created: Project = decode(record)?;
        info!(id = created.id, "project created");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: RecordId, changes: ProjectChanges) -> Result<Project> {
        let params = WriteParams::single(&changes.into_fields(id))?;
        let record = self
            .store
            .update_record(Table::Project, &params)
            .await?
            .into_first_record("update project")?;
        info!(id, "project updated");
        decode(record)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.store.delete_record(Table::Project, &DeleteParams::single(id)).await?.ensure_success()?;
        info!(id, "project deleted");
        Ok(())
    }
}
