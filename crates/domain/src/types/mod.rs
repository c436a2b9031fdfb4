//! Domain types
//!
//! - Entity records and write requests (clients, projects, tasks, invoices)
//! - Time tracking state
//! - Dashboard snapshot
//! - Remote record store wire envelopes

pub mod client;
pub mod dashboard;
pub mod invoice;
pub mod project;
pub mod store;
pub mod task;
pub mod time_tracking;

/// Identifier assigned by the remote record store.
pub type RecordId = i64;

/// Task identifier; keys the time tracking store.
pub type TaskId = RecordId;

pub use client::{Client, ClientChanges, ClientFields, ClientStatus, NewClient};
pub use dashboard::{DashboardData, DashboardSummary, QuickStats};
pub use invoice::{Invoice, InvoiceChanges, InvoiceFields, InvoiceStatus, NewInvoice};
pub use project::{NewProject, Project, ProjectChanges, ProjectFields, ProjectStatus};
pub use store::{
    DeleteParams, DeleteResponse, FetchParams, FetchResponse, FieldParams, FieldSelector,
    GetResponse, OrderBy, RecordRef, SortOrder, Table, WriteParams, WriteResponse, WriteResult,
};
pub use task::{NewTask, Task, TaskChanges, TaskFields, TaskPriority, TaskRecord, TaskStatus};
pub use time_tracking::{ActiveTimer, TimeLog, TimerState};
