//! Dashboard service - concurrent fetch, then aggregate

use std::sync::Arc;

use clientdesk_domain::{DashboardData, Result};
use tracing::{debug, instrument};

use super::aggregator::aggregate;
use crate::accessors::{ClientAccessor, InvoiceAccessor, ProjectAccessor, TaskAccessor};
use crate::tracking::{Clock, SystemClock};

/// Builds dashboard snapshots from the four entity accessors
pub struct DashboardService {
    clients: Arc<ClientAccessor>,
    projects: Arc<ProjectAccessor>,
    tasks: Arc<TaskAccessor>,
    invoices: Arc<InvoiceAccessor>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(
        clients: Arc<ClientAccessor>,
        projects: Arc<ProjectAccessor>,
        tasks: Arc<TaskAccessor>,
        invoices: Arc<InvoiceAccessor>,
    ) -> Self {
        Self { clients, projects, tasks, invoices, clock: Arc::new(SystemClock) }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Fetch all four collections concurrently and aggregate them.
    ///
    /// # Errors
    /// The first failing fetch aborts the whole snapshot; no partial
    /// dashboard is returned.
    #[instrument(skip(self))]
    pub async fn get_dashboard_data(&self) -> Result<DashboardData> {
        let (clients, projects, tasks, invoices) = tokio::try_join!(
            self.clients.get_all(),
            self.projects.get_all(),
            self.tasks.get_all(),
            self.invoices.get_all(),
        )?;
        debug!(
            clients = clients.len(),
            projects = projects.len(),
            tasks = tasks.len(),
            invoices = invoices.len(),
            "aggregating dashboard"
        );

        Ok(aggregate(&clients, &projects, &tasks, &invoices, self.clock.now()))
    }
}
