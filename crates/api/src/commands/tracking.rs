//! Time tracking commands

use clientdesk_domain::{ActiveTimer, Result, TaskId, TimeLog, TimerState};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn start_timer(ctx: &AppContext, task_id: TaskId) -> Result<ActiveTimer> {
    execute_command("tracking::start_timer", || ctx.time_tracking.start_timer(task_id)).await
}

pub async fn stop_timer(ctx: &AppContext, task_id: TaskId) -> Result<TimeLog> {
    execute_command("tracking::stop_timer", || ctx.time_tracking.stop_timer(task_id)).await
}

pub async fn get_time_logs(ctx: &AppContext, task_id: TaskId) -> Result<Vec<TimeLog>> {
    execute_command("tracking::get_time_logs", || async {
        Ok(ctx.time_tracking.get_time_logs(task_id).await)
    })
    .await
}

pub async fn get_timer_state(ctx: &AppContext, task_id: TaskId) -> Result<TimerState> {
    execute_command("tracking::get_timer_state", || async {
        Ok(ctx.time_tracking.timer_state(task_id).await)
    })
    .await
}
