//! Entity accessors over the remote record store
//!
//! Each accessor converts typed requests into store parameters and decodes
//! store records back into typed records. Envelope checks (`success: false`,
//! rejected batch entries) are applied here so callers only see
//! [`ClientDeskError`](clientdesk_domain::ClientDeskError) values.

pub mod client;
pub mod invoice;
pub mod project;
pub mod task;

pub use client::ClientAccessor;
pub use invoice::InvoiceAccessor;
pub use project::ProjectAccessor;
pub use task::TaskAccessor;

use clientdesk_domain::{FetchParams, FieldParams, FieldSelector, OrderBy, Result, SortOrder};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub(crate) fn fetch_params(fields: &[&str], order_field: &str, order: SortOrder) -> FetchParams {
    FetchParams {
        fields: FieldSelector::list(fields),
        order_by: vec![OrderBy::new(order_field, order)],
    }
}

pub(crate) fn field_params(fields: &[&str]) -> FieldParams {
    FieldParams { fields: FieldSelector::list(fields) }
}

pub(crate) fn decode<T: DeserializeOwned>(record: Value) -> Result<T> {
    Ok(serde_json::from_value(record)?)
}

pub(crate) fn decode_all<T: DeserializeOwned>(records: Vec<Value>) -> Result<Vec<T>> {
    records.into_iter().map(decode).collect()
}
