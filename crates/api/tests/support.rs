//! Shared fixtures for application-layer integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use clientdesk_core::{Clock, RecordStore};
use clientdesk_domain::{
    Config, DeleteParams, DeleteResponse, FetchParams, FetchResponse, FieldParams, GetResponse,
    RecordId, Result, Table, WriteParams, WriteResponse, WriteResult,
};
use clientdesk_infra::InMemoryTimerStore;
use clientdesk_lib::AppContext;
use serde_json::{json, Value};

/// Record store answering from fixed per-table data.
///
/// Writes echo the submitted record (creates get a fresh id) and are logged
/// for assertions.
#[derive(Default)]
pub struct StubRecordStore {
    tables: HashMap<Table, Vec<Value>>,
    writes: Mutex<Vec<(Table, Value)>>,
    next_id: Mutex<RecordId>,
}

impl StubRecordStore {
    pub fn with_table(mut self, table: Table, records: Value) -> Self {
        let records = records.as_array().cloned().unwrap_or_default();
        self.tables.insert(table, records);
        self
    }

    pub fn writes(&self) -> Vec<(Table, Value)> {
        self.writes.lock().unwrap().clone()
    }

    fn echo(&self, table: Table, params: &WriteParams, assign_id: bool) -> WriteResponse {
        let mut results = Vec::new();
        for record in &params.records {
            let mut record = record.clone();
            if assign_id {
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                record["Id"] = json!(100 + *next);
            }
            self.writes.lock().unwrap().push((table, record.clone()));
            results.push(WriteResult { success: true, message: None, data: Some(record) });
        }
        WriteResponse { success: true, message: None, results: Some(results) }
    }
}

#[async_trait]
impl RecordStore for StubRecordStore {
    async fn fetch_records(&self, table: Table, _params: &FetchParams) -> Result<FetchResponse> {
        Ok(FetchResponse {
            success: true,
            message: None,
            data: Some(self.tables.get(&table).cloned().unwrap_or_default()),
        })
    }

    async fn get_record_by_id(
        &self,
        table: Table,
        id: RecordId,
        _params: &FieldParams,
    ) -> Result<GetResponse> {
        let record = self
            .tables
            .get(&table)
            .and_then(|records| records.iter().find(|r| r["Id"] == json!(id)).cloned());
        Ok(GetResponse { success: true, message: None, data: record })
    }

    async fn create_record(&self, table: Table, params: &WriteParams) -> Result<WriteResponse> {
        Ok(self.echo(table, params, true))
    }

    async fn update_record(&self, table: Table, params: &WriteParams) -> Result<WriteResponse> {
        Ok(self.echo(table, params, false))
    }

    async fn delete_record(&self, table: Table, params: &DeleteParams) -> Result<DeleteResponse> {
        self.writes.lock().unwrap().push((table, json!({"deleted": params.record_ids})));
        Ok(DeleteResponse { success: true, message: None })
    }
}

/// Clock advanced by hand
pub struct TestClock(Mutex<DateTime<Utc>>);

impl TestClock {
    pub fn new() -> Self {
        Self(Mutex::new(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()))
    }

    pub fn advance(&self, by: Duration) {
        *self.0.lock().unwrap() += by;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Context over a stub store, in-memory timers and a manual clock.
pub fn test_context(store: StubRecordStore) -> (AppContext, Arc<StubRecordStore>, Arc<TestClock>) {
    let store = Arc::new(store);
    let clock = Arc::new(TestClock::new());
    let ctx = AppContext::with_ports(
        Config::default(),
        store.clone(),
        Arc::new(InMemoryTimerStore::new()),
        clock.clone(),
    );
    (ctx, store, clock)
}
