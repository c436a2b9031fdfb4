//! Dashboard commands

use clientdesk_domain::{DashboardData, Result};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Summary and quick stats over all entities
pub async fn get_dashboard_data(ctx: &AppContext) -> Result<DashboardData> {
    execute_command("dashboard::get_dashboard_data", || ctx.dashboard.get_dashboard_data()).await
}
