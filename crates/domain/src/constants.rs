//! Application constants
//!
//! Centralized location for domain-level constants: remote table names, the
//! field lists requested per entity, and unit conversions.

// Remote table names
pub const CLIENT_TABLE: &str = "client";
pub const PROJECT_TABLE: &str = "project";
pub const TASK_TABLE: &str = "task";
pub const INVOICE_TABLE: &str = "app_invoice";

// Field lists requested from the remote store
pub const CLIENT_FIELDS: &[&str] = &["Name", "email", "company", "status", "CreatedOn"];
pub const PROJECT_FIELDS: &[&str] =
    &["Name", "status", "budget", "start_date", "end_date", "client_id"];
pub const TASK_FIELDS: &[&str] =
    &["title", "priority", "status", "due_date", "time_tracking", "project_id"];
pub const INVOICE_FIELDS: &[&str] =
    &["amount", "status", "due_date", "payment_date", "client_id", "project_id"];

// Default sort fields
pub const CLIENT_ORDER_FIELD: &str = "CreatedOn";
pub const PROJECT_ORDER_FIELD: &str = "start_date";
pub const TASK_ORDER_FIELD: &str = "due_date";
pub const INVOICE_ORDER_FIELD: &str = "due_date";

// Time conversions
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;
