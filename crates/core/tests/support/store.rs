//! In-memory mock for `RecordStore`.
//!
//! Keeps records per table as raw JSON, assigns ids on create and records
//! every call so tests can assert on what reached the store. Failures can be
//! injected per table (envelope `success: false`) or for writes (a rejected
//! batch entry), and transport errors can be injected per table.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use clientdesk_core::RecordStore;
use clientdesk_domain::{
    ClientDeskError, DeleteParams, DeleteResponse, FetchParams, FetchResponse, FieldParams,
    GetResponse, RecordId, Result, Table, WriteParams, WriteResponse, WriteResult,
};
use serde_json::{json, Value};

/// One call observed by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct StoreCall {
    pub op: &'static str,
    pub table: Table,
    pub body: Value,
}

#[derive(Default)]
struct Inner {
    tables: HashMap<Table, Vec<Value>>,
    next_id: RecordId,
    calls: Vec<StoreCall>,
    failing: HashMap<Table, String>,
    transport: HashMap<Table, ClientDeskError>,
    rejected_writes: Option<String>,
}

#[derive(Default)]
pub struct MockRecordStore {
    inner: Mutex<Inner>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table; records keep the `Id` they carry.
    pub fn with_records(self, table: Table, records: Vec<Value>) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            let max_id = records.iter().filter_map(|r| r["Id"].as_i64()).max().unwrap_or(0);
            inner.next_id = inner.next_id.max(max_id);
            inner.tables.entry(table).or_default().extend(records);
        }
        self
    }

    /// Answer every call on `table` with `success: false`.
    pub fn failing(self, table: Table, message: &str) -> Self {
        self.inner.lock().unwrap().failing.insert(table, message.to_string());
        self
    }

    /// Fail every call on `table` at the transport level.
    pub fn unreachable(self, table: Table, error: ClientDeskError) -> Self {
        self.inner.lock().unwrap().transport.insert(table, error);
        self
    }

    /// Append a rejected entry to every write batch.
    pub fn rejecting_writes(self, message: &str) -> Self {
        self.inner.lock().unwrap().rejected_writes = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn calls_for(&self, op: &str) -> Vec<StoreCall> {
        self.calls().into_iter().filter(|call| call.op == op).collect()
    }

    pub fn records(&self, table: Table) -> Vec<Value> {
        self.inner.lock().unwrap().tables.get(&table).cloned().unwrap_or_default()
    }

    /// Record the call and apply injected failures. `Ok(Some(message))`
    /// means the envelope should report failure.
    fn begin(&self, op: &'static str, table: Table, body: Value) -> Result<Option<String>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(StoreCall { op, table, body });
        if let Some(err) = inner.transport.get(&table) {
            return Err(err.clone());
        }
        Ok(inner.failing.get(&table).cloned())
    }

    fn write_results(&self, mut results: Vec<WriteResult>) -> Vec<WriteResult> {
        if let Some(message) = self.inner.lock().unwrap().rejected_writes.clone() {
            results.push(WriteResult { success: false, message: Some(message), data: None });
        }
        results
    }
}

fn failed_write(message: String) -> WriteResponse {
    WriteResponse { success: false, message: Some(message), results: None }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn fetch_records(&self, table: Table, params: &FetchParams) -> Result<FetchResponse> {
        if let Some(message) = self.begin("fetch", table, serde_json::to_value(params)?)? {
            return Ok(FetchResponse { success: false, message: Some(message), data: None });
        }
        Ok(FetchResponse { success: true, message: None, data: Some(self.records(table)) })
    }

    async fn get_record_by_id(
        &self,
        table: Table,
        id: RecordId,
        params: &FieldParams,
    ) -> Result<GetResponse> {
        let body = json!({"id": id, "params": params});
        if let Some(message) = self.begin("get", table, body)? {
            return Ok(GetResponse { success: false, message: Some(message), data: None });
        }
        let record = self.records(table).into_iter().find(|r| r["Id"] == json!(id));
        Ok(GetResponse { success: true, message: None, data: record })
    }

    async fn create_record(&self, table: Table, params: &WriteParams) -> Result<WriteResponse> {
        if let Some(message) = self.begin("create", table, serde_json::to_value(params)?)? {
            return Ok(failed_write(message));
        }

        let mut results = Vec::new();
        {
            let mut inner = self.inner.lock().unwrap();
            for record in &params.records {
                inner.next_id += 1;
                let mut stored = record.clone();
                stored["Id"] = json!(inner.next_id);
                inner.tables.entry(table).or_default().push(stored.clone());
                results.push(WriteResult { success: true, message: None, data: Some(stored) });
            }
        }
        Ok(WriteResponse { success: true, message: None, results: Some(self.write_results(results)) })
    }

    async fn update_record(&self, table: Table, params: &WriteParams) -> Result<WriteResponse> {
        if let Some(message) = self.begin("update", table, serde_json::to_value(params)?)? {
            return Ok(failed_write(message));
        }

        let mut results = Vec::new();
        {
            let mut inner = self.inner.lock().unwrap();
            let rows = inner.tables.entry(table).or_default();
            for change in &params.records {
                let existing = rows.iter_mut().find(|row| row["Id"] == change["Id"]);
                let result = match (existing, change.as_object()) {
                    (Some(row), Some(fields)) => {
                        for (key, value) in fields {
                            row[key.as_str()] = value.clone();
                        }
                        WriteResult { success: true, message: None, data: Some(row.clone()) }
                    }
                    _ => WriteResult {
                        success: false,
                        message: Some("Record does not exist".into()),
                        data: None,
                    },
                };
                results.push(result);
            }
        }
        Ok(WriteResponse { success: true, message: None, results: Some(self.write_results(results)) })
    }

    async fn delete_record(&self, table: Table, params: &DeleteParams) -> Result<DeleteResponse> {
        if let Some(message) = self.begin("delete", table, serde_json::to_value(params)?)? {
            return Ok(DeleteResponse { success: false, message: Some(message) });
        }

        let mut inner = self.inner.lock().unwrap();
        let rows = inner.tables.entry(table).or_default();
        rows.retain(|row| {
            row["Id"].as_i64().map_or(true, |id| !params.record_ids.contains(&id))
        });
        Ok(DeleteResponse { success: true, message: None })
    }
}
