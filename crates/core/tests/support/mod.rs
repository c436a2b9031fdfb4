//! Shared test helpers for `clientdesk-core` integration tests.
//!
//! An in-memory record store with failure injection, a simple timer store and
//! a manually advanced clock, so tests can focus on behaviour instead of
//! wiring.

#![allow(dead_code)]

pub mod clock;
pub mod store;
pub mod timers;

use std::sync::Arc;

use clientdesk_core::{
    ClientAccessor, DashboardService, InvoiceAccessor, ProjectAccessor, TaskAccessor,
    TimeTrackingService,
};

pub use clock::ManualClock;
pub use store::MockRecordStore;
pub use timers::MapTimerStore;

/// Every core service wired against the same mocks.
pub struct Harness {
    pub store: Arc<MockRecordStore>,
    pub clock: Arc<ManualClock>,
    pub time_tracking: Arc<TimeTrackingService>,
    pub clients: Arc<ClientAccessor>,
    pub projects: Arc<ProjectAccessor>,
    pub tasks: Arc<TaskAccessor>,
    pub invoices: Arc<InvoiceAccessor>,
    pub dashboard: DashboardService,
}

impl Harness {
    pub fn new(store: MockRecordStore) -> Self {
        let store = Arc::new(store);
        let clock = Arc::new(ManualClock::default());

        let time_tracking = Arc::new(
            TimeTrackingService::new(Arc::new(MapTimerStore::default()))
                .with_clock(clock.clone()),
        );
        let clients = Arc::new(ClientAccessor::new(store.clone()));
        let projects = Arc::new(ProjectAccessor::new(store.clone()));
        let tasks = Arc::new(TaskAccessor::new(store.clone(), time_tracking.clone()));
        let invoices = Arc::new(InvoiceAccessor::new(store.clone()));
        let dashboard = DashboardService::new(
            clients.clone(),
            projects.clone(),
            tasks.clone(),
            invoices.clone(),
        )
        .with_clock(clock.clone());

        Self { store, clock, time_tracking, clients, projects, tasks, invoices, dashboard }
    }
}
