//! Dashboard snapshot types
//!
//! Computed on demand from the full entity collections; never stored.

use serde::{Deserialize, Serialize};

/// Headline counts shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_clients: usize,
    pub active_projects: usize,
    pub pending_tasks: usize,
    /// Sum of paid invoice amounts, rounded to whole currency units
    pub monthly_revenue: i64,
    pub completed_tasks: usize,
    pub overdue_items: usize,
}

/// Secondary statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    pub projects_this_week: usize,
    pub tasks_completed: usize,
    pub hours_tracked: f64,
    pub invoices_sent: usize,
}

/// Point-in-time dashboard snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub quick_stats: QuickStats,
}
