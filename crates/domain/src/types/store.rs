//! Remote record store wire types
//!
//! Request parameters and response envelopes exchanged with the hosted record
//! store, plus the envelope checks every accessor applies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RecordId;
use crate::constants::{CLIENT_TABLE, INVOICE_TABLE, PROJECT_TABLE, TASK_TABLE};
use crate::errors::{ClientDeskError, Result};

/// Named entity tables on the remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Client,
    Project,
    Task,
    Invoice,
}

impl Table {
    /// Remote table name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Client => CLIENT_TABLE,
            Self::Project => PROJECT_TABLE,
            Self::Task => TASK_TABLE,
            Self::Invoice => INVOICE_TABLE,
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference to a related record.
///
/// Lookup columns come back either as a bare id or as an `{Id, Name}` object
/// depending on the query, so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordRef {
    Id(RecordId),
    Lookup {
        #[serde(rename = "Id")]
        id: RecordId,
        #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl RecordRef {
    pub fn id(&self) -> RecordId {
        match self {
            Self::Id(id) | Self::Lookup { id, .. } => *id,
        }
    }

    /// Display name when the store expanded the lookup.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Lookup { name, .. } => name.as_deref(),
        }
    }
}

impl From<RecordId> for RecordRef {
    fn from(id: RecordId) -> Self {
        Self::Id(id)
    }
}

/// `{ "field": { "Name": "<column>" } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSelector {
    pub field: FieldName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldName {
    #[serde(rename = "Name")]
    pub name: String,
}

impl FieldSelector {
    pub fn new(name: impl Into<String>) -> Self {
        Self { field: FieldName { name: name.into() } }
    }

    /// Build selectors for a constant column list.
    pub fn list(names: &[&str]) -> Vec<Self> {
        names.iter().map(|name| Self::new(*name)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub field_name: String,
    #[serde(rename = "sorttype")]
    pub sort_type: SortOrder,
}

impl OrderBy {
    pub fn new(field_name: impl Into<String>, sort_type: SortOrder) -> Self {
        Self { field_name: field_name.into(), sort_type }
    }
}

/// Parameters for `fetchRecords`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchParams {
    pub fields: Vec<FieldSelector>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderBy>,
}

/// Parameters for `getRecordById`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldParams {
    pub fields: Vec<FieldSelector>,
}

/// Parameters for `createRecord` / `updateRecord`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteParams {
    pub records: Vec<Value>,
}

impl WriteParams {
    /// Serialize a single typed record into a one-element batch.
    pub fn single<T: Serialize>(record: &T) -> Result<Self> {
        Ok(Self { records: vec![serde_json::to_value(record)?] })
    }
}

/// Parameters for `deleteRecord`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteParams {
    #[serde(rename = "RecordIds")]
    pub record_ids: Vec<RecordId>,
}

impl DeleteParams {
    pub fn single(id: RecordId) -> Self {
        Self { record_ids: vec![id] }
    }
}

/// Envelope returned by `fetchRecords`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

impl FetchResponse {
    /// Check `success` and return the records (`null` data is an empty list).
    pub fn into_records(self) -> Result<Vec<Value>> {
        ensure_success(self.success, self.message)?;
        Ok(self.data.unwrap_or_default())
    }
}

/// Envelope returned by `getRecordById`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl GetResponse {
    /// Check `success` and return the record; a missing record is `NotFound`.
    pub fn into_record(self, table: Table, id: RecordId) -> Result<Value> {
        ensure_success(self.success, self.message)?;
        match self.data {
            Some(Value::Null) | None => {
                Err(ClientDeskError::NotFound(format!("{table} record {id}")))
            }
            Some(record) => Ok(record),
        }
    }
}

/// Per-record outcome inside a write envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Envelope returned by `createRecord` / `updateRecord`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<WriteResult>>,
}

impl WriteResponse {
    /// Check the envelope and every result entry, returning the first
    /// record's data.
    ///
    /// `operation` names the write for the fallback message
    /// (`"create task"` → `"Failed to create task"`).
    pub fn into_first_record(self, operation: &str) -> Result<Value> {
        ensure_success(self.success, self.message)?;

        let results = self.results.unwrap_or_default();
        if let Some(failed) = results.iter().find(|result| !result.success) {
            let message =
                failed.message.clone().unwrap_or_else(|| format!("Failed to {operation}"));
            return Err(ClientDeskError::WriteRejected(message));
        }

        results
            .into_iter()
            .next()
            .and_then(|result| result.data)
            .ok_or_else(|| {
                ClientDeskError::RemoteStore(format!("Failed to {operation}: no record returned"))
            })
    }
}

/// Envelope returned by `deleteRecord`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DeleteResponse {
    pub fn ensure_success(self) -> Result<()> {
        ensure_success(self.success, self.message)
    }
}

fn ensure_success(success: bool, message: Option<String>) -> Result<()> {
    if success {
        Ok(())
    } else {
        Err(ClientDeskError::RemoteStore(
            message.unwrap_or_else(|| "remote store reported failure".to_string()),
        ))
    }
}
