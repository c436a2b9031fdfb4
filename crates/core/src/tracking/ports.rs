//! Port interfaces for time tracking
//!
//! These traits define the boundaries between the timer logic and the
//! storage/clock implementations it runs on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clientdesk_domain::{ActiveTimer, Result, TaskId, TimeLog, TimerState};

/// Keyed storage for per-task timer state.
///
/// Implementations must serialize `start`/`stop` for the same task id so the
/// read-check-write of a transition is never interleaved.
#[async_trait]
pub trait TimerStore: Send + Sync {
    /// Start a session for `task_id` at `now`.
    async fn start(&self, task_id: TaskId, now: DateTime<Utc>) -> Result<ActiveTimer>;

    /// Stop the active session for `task_id` at `now`.
    async fn stop(&self, task_id: TaskId, now: DateTime<Utc>) -> Result<TimeLog>;

    /// Snapshot of the state for `task_id`; default state when none exists.
    /// Reading never creates an entry.
    async fn state(&self, task_id: TaskId) -> TimerState;

    /// Drop all state for `task_id`. Returns whether anything was removed.
    async fn remove(&self, task_id: TaskId) -> bool;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
