//! Task records

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::store::RecordRef;
use super::time_tracking::TimerState;
use super::RecordId;
use crate::define_status_enum;

define_status_enum! {
    /// Workflow status of a task
    pub enum TaskStatus {
        Todo => "todo",
        InProgress => "in-progress",
        Review => "review",
        Done => "done",
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Todo
    }
}

define_status_enum! {
    pub enum TaskPriority {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}

/// Task record as returned by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "Id")]
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub due_date: Option<String>,
    /// Opaque `time_tracking` column kept on the remote record; local timer
    /// state lives in [`Task::time_tracking`].
    #[serde(rename = "time_tracking", default)]
    pub remote_time_tracking: Option<Value>,
    #[serde(default)]
    pub project_id: Option<RecordRef>,
}

/// Task merged with its local timer state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(flatten)]
    pub record: TaskRecord,
    #[serde(rename = "timeTracking", default)]
    pub time_tracking: TimerState,
}

impl Task {
    pub fn new(record: TaskRecord, time_tracking: TimerState) -> Self {
        Self { record, time_tracking }
    }

    pub fn id(&self) -> RecordId {
        self.record.id
    }

    pub fn status(&self) -> Option<&TaskStatus> {
        self.record.status.as_ref()
    }

    /// `todo` or `in-progress`
    pub fn is_pending(&self) -> bool {
        matches!(self.status(), Some(TaskStatus::Todo | TaskStatus::InProgress))
    }

    pub fn is_done(&self) -> bool {
        matches!(self.status(), Some(TaskStatus::Done))
    }
}

/// Request to create a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    /// Defaults to `medium`
    pub priority: Option<TaskPriority>,
    /// Defaults to `todo`
    pub status: Option<TaskStatus>,
    pub due_date: Option<String>,
    pub project_id: RecordId,
}

/// Partial update of a task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<String>,
    pub project_id: Option<RecordId>,
}

/// Task columns in store naming
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskFields {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<RecordId>,
}

impl NewTask {
    pub fn into_fields(self) -> TaskFields {
        TaskFields {
            id: None,
            title: Some(self.title),
            priority: Some(self.priority.unwrap_or_default()),
            status: Some(self.status.unwrap_or_default()),
            due_date: self.due_date,
            project_id: Some(self.project_id),
        }
    }
}

impl TaskChanges {
    pub fn into_fields(self, id: RecordId) -> TaskFields {
        TaskFields {
            id: Some(id),
            title: self.title,
            priority: self.priority,
            status: self.status,
            due_date: self.due_date,
            project_id: self.project_id,
        }
    }

    /// Status-only change.
    pub fn status_only(status: TaskStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }
}
