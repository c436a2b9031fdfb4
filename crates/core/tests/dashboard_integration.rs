//! Integration tests for the dashboard fan-out

mod support;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use clientdesk_core::{
    ClientAccessor, DashboardService, InvoiceAccessor, ProjectAccessor, RecordStore, TaskAccessor,
    TimeTrackingService,
};
use clientdesk_domain::{
    ClientDeskError, DeleteParams, DeleteResponse, FetchParams, FetchResponse, FieldParams,
    GetResponse, RecordId, Result, Table, WriteParams, WriteResponse,
};
use serde_json::json;
use support::{Harness, MapTimerStore, MockRecordStore};
use tokio::sync::Barrier;

fn populated_store() -> MockRecordStore {
    MockRecordStore::new()
        .with_records(
            Table::Client,
            vec![json!({"Id": 1, "Name": "Acme"}), json!({"Id": 2, "Name": "Globex"})],
        )
        .with_records(
            Table::Project,
            vec![
                json!({"Id": 10, "Name": "Rebrand", "status": "active"}),
                json!({"Id": 11, "Name": "Audit", "status": "completed"}),
            ],
        )
        .with_records(
            Table::Task,
            vec![
                json!({"Id": 20, "title": "Brief", "status": "todo", "due_date": "2020-01-01"}),
                json!({"Id": 21, "title": "Launch", "status": "done", "due_date": "2099-01-01"}),
            ],
        )
        .with_records(
            Table::Invoice,
            vec![
                json!({"Id": 30, "amount": 100.4, "status": "paid"}),
                json!({"Id": 31, "amount": 50.1, "status": "paid"}),
                json!({"Id": 32, "amount": 10, "status": "sent"}),
            ],
        )
}

#[tokio::test]
async fn dashboard_combines_all_collections() {
    let harness = Harness::new(populated_store());
    harness.time_tracking.start_timer(20).await.unwrap();
    harness.clock.advance(Duration::minutes(45));
    harness.time_tracking.stop_timer(20).await.unwrap();

    let data = harness.dashboard.get_dashboard_data().await.unwrap();

    assert_eq!(data.summary.total_clients, 2);
    assert_eq!(data.summary.active_projects, 1);
    assert_eq!(data.summary.pending_tasks, 1);
    assert_eq!(data.summary.completed_tasks, 1);
    assert_eq!(data.summary.overdue_items, 1);
    assert_eq!(data.summary.monthly_revenue, 150);
    assert_eq!(data.quick_stats.invoices_sent, 1);
    assert_eq!(data.quick_stats.projects_this_week, 1);
    assert!((data.quick_stats.hours_tracked - 0.75).abs() < 1e-9);
}

#[tokio::test]
async fn failing_fetch_aborts_dashboard() {
    let harness = Harness::new(populated_store().failing(Table::Invoice, "Service unavailable"));

    let err = harness.dashboard.get_dashboard_data().await.unwrap_err();

    assert_eq!(err, ClientDeskError::RemoteStore("Service unavailable".into()));
}

#[tokio::test]
async fn transport_failure_aborts_dashboard() {
    let harness = Harness::new(
        populated_store().unreachable(Table::Client, ClientDeskError::Network("timed out".into())),
    );

    let err = harness.dashboard.get_dashboard_data().await.unwrap_err();

    assert_eq!(err, ClientDeskError::Network("timed out".into()));
}

/// Store whose fetches only complete once all four tables are being fetched.
struct RendezvousStore {
    barrier: Barrier,
}

#[async_trait]
impl RecordStore for RendezvousStore {
    async fn fetch_records(&self, _table: Table, _params: &FetchParams) -> Result<FetchResponse> {
        self.barrier.wait().await;
        Ok(FetchResponse { success: true, message: None, data: Some(Vec::new()) })
    }

    async fn get_record_by_id(
        &self,
        table: Table,
        _id: RecordId,
        _params: &FieldParams,
    ) -> Result<GetResponse> {
        Err(ClientDeskError::Internal(format!("unexpected get on {table}")))
    }

    async fn create_record(&self, table: Table, _params: &WriteParams) -> Result<WriteResponse> {
        Err(ClientDeskError::Internal(format!("unexpected create on {table}")))
    }

    async fn update_record(&self, table: Table, _params: &WriteParams) -> Result<WriteResponse> {
        Err(ClientDeskError::Internal(format!("unexpected update on {table}")))
    }

    async fn delete_record(&self, table: Table, _params: &DeleteParams) -> Result<DeleteResponse> {
        Err(ClientDeskError::Internal(format!("unexpected delete on {table}")))
    }
}

#[tokio::test]
async fn dashboard_fetches_all_tables_concurrently() {
    let store = Arc::new(RendezvousStore { barrier: Barrier::new(4) });
    let time_tracking = Arc::new(TimeTrackingService::new(Arc::new(MapTimerStore::default())));
    let dashboard = DashboardService::new(
        Arc::new(ClientAccessor::new(store.clone())),
        Arc::new(ProjectAccessor::new(store.clone())),
        Arc::new(TaskAccessor::new(store.clone(), time_tracking)),
        Arc::new(InvoiceAccessor::new(store)),
    );

    let data = tokio::time::timeout(std::time::Duration::from_secs(5), dashboard.get_dashboard_data())
        .await
        .expect("fetches were issued one after another")
        .unwrap();

    assert_eq!(data.summary.total_clients, 0);
}
