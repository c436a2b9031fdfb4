//! Task accessor
//!
//! Tasks are stored remotely, but their timer state is local. Every read
//! merges the remote record with the current [`TimerState`] snapshot, and a
//! successful delete drops the local state too.
//!
//! [`TimerState`]: clientdesk_domain::TimerState

use std::sync::Arc;

use clientdesk_domain::constants::{TASK_FIELDS, TASK_ORDER_FIELD};
use clientdesk_domain::{
    DeleteParams, NewTask, RecordId, Result, SortOrder, Table, Task, TaskChanges, TaskRecord,
    TaskStatus, WriteParams,
};
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{decode, decode_all, fetch_params, field_params};
use crate::store::RecordStore;
use crate::tracking::TimeTrackingService;

/// CRUD for task records, earliest due date first
pub struct TaskAccessor {
    store: Arc<dyn RecordStore>,
    time_tracking: Arc<TimeTrackingService>,
}

impl TaskAccessor {
    pub fn new(store: Arc<dyn RecordStore>, time_tracking: Arc<TimeTrackingService>) -> Self {
        Self { store, time_tracking }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Task>> {
        let params = fetch_params(TASK_FIELDS, TASK_ORDER_FIELD, SortOrder::Asc);
        let records: Vec<TaskRecord> =
            decode_all(self.store.fetch_records(Table::Task, &params).await?.into_records()?)?;
        debug!(count = records.len(), "fetched tasks");

        let mut tasks = Vec::with_capacity(records.len());
        for record in records {
            tasks.push(self.merge(record).await);
        }
        Ok(tasks)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: RecordId) -> Result<Task> {
        let response =
            self.store.get_record_by_id(Table::Task, id, &field_params(TASK_FIELDS)).await?;
        let record = decode(response.into_record(Table::Task, id)?)?;
        Ok(self.merge(record).await)
    }

    /// Create a task; priority defaults to `medium`, status to `todo`.
    #[instrument(skip(self, task), fields(title = %task.title))]
    pub async fn create(&self, task: NewTask) -> Result<Task> {
        let params = WriteParams::single(&task.into_fields())?;
        let record =
            self.store.create_record(Table::Task, &params).await?.into_first_record("create task")?;
        let created = self.decode_and_merge(record).await?;
        info!(id = created.id(), "task created");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: RecordId, changes: TaskChanges) -> Result<Task> {
        let params = WriteParams::single(&changes.into_fields(id))?;
        let record =
            self.store.update_record(Table::Task, &params).await?.into_first_record("update task")?;
        info!(id, "task updated");
        self.decode_and_merge(record).await
    }

    /// Change only the workflow status.
    pub async fn update_status(&self, id: RecordId, status: TaskStatus) -> Result<Task> {
        self.update(id, TaskChanges::status_only(status)).await
    }

    /// Delete the remote record, then its local timer state.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.store.delete_record(Table::Task, &DeleteParams::single(id)).await?.ensure_success()?;
        self.time_tracking.delete_timer_state(id).await;
        info!(id, "task deleted");
        Ok(())
    }

    async fn decode_and_merge(&self, record: Value) -> Result<Task> {
        let record: TaskRecord = decode(record)?;
        Ok(self.merge(record).await)
    }

    async fn merge(&self, record: TaskRecord) -> Task {
        let state = self.time_tracking.timer_state(record.id).await;
        Task::new(record, state)
    }
}
