//! Application context - dependency injection container

use std::sync::Arc;

use clientdesk_core::{
    ClientAccessor, Clock, DashboardService, InvoiceAccessor, ProjectAccessor, RecordStore,
    SystemClock, TaskAccessor, TimeTrackingService, TimerStore,
};
use clientdesk_domain::{Config, Result};
use clientdesk_infra::{config, HttpRecordStore, InMemoryTimerStore};

/// Type alias for record store port trait object
pub type DynRecordStore = dyn RecordStore + Send + Sync + 'static;

/// Type alias for timer store port trait object
pub type DynTimerStore = dyn TimerStore + Send + Sync + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub record_store: Arc<DynRecordStore>,
    pub timer_store: Arc<DynTimerStore>,

    // Core services
    pub time_tracking: Arc<TimeTrackingService>,
    pub clients: Arc<ClientAccessor>,
    pub projects: Arc<ProjectAccessor>,
    pub tasks: Arc<TaskAccessor>,
    pub invoices: Arc<InvoiceAccessor>,
    pub dashboard: Arc<DashboardService>,
}

impl AppContext {
    /// Create a context from configuration found in the environment or on disk
    pub fn new() -> Result<Self> {
        Self::new_with_config(config::load()?)
    }

    /// Create a context talking to the record store described by `config`
    pub fn new_with_config(config: Config) -> Result<Self> {
        let store = Arc::new(HttpRecordStore::new(&config.store)?);
        tracing::info!(base_url = %config.store.base_url, "record store configured");
        Ok(Self::with_record_store(config, store))
    }

    /// Create a context over any record store, with in-memory timers and the
    /// wall clock
    pub fn with_record_store(config: Config, record_store: Arc<DynRecordStore>) -> Self {
        Self::with_ports(config, record_store, Arc::new(InMemoryTimerStore::new()), Arc::new(SystemClock))
    }

    /// Create a context with every port supplied by the caller
    pub fn with_ports(
        config: Config,
        record_store: Arc<DynRecordStore>,
        timer_store: Arc<DynTimerStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let time_tracking =
            Arc::new(TimeTrackingService::new(timer_store.clone()).with_clock(clock.clone()));

        let clients = Arc::new(ClientAccessor::new(record_store.clone()));
        let projects = Arc::new(ProjectAccessor::new(record_store.clone()));
        let tasks = Arc::new(TaskAccessor::new(record_store.clone(), time_tracking.clone()));
        let invoices = Arc::new(InvoiceAccessor::new(record_store.clone()));

        let dashboard = Arc::new(
            DashboardService::new(clients.clone(), projects.clone(), tasks.clone(), invoices.clone())
                .with_clock(clock),
        );

        Self {
            config,
            record_store,
            timer_store,
            time_tracking,
            clients,
            projects,
            tasks,
            invoices,
            dashboard,
        }
    }
}
