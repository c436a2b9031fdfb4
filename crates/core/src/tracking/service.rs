//! Time tracking service - per-task logging sessions

use std::sync::Arc;

use clientdesk_domain::{ActiveTimer, Result, TaskId, TimeLog, TimerState};
use tracing::{info, instrument, warn};

use super::ports::{Clock, SystemClock, TimerStore};

/// Time tracking service
pub struct TimeTrackingService {
    store: Arc<dyn TimerStore>,
    clock: Arc<dyn Clock>,
}

impl TimeTrackingService {
    /// Create a service that reads the wall clock
    pub fn new(store: Arc<dyn TimerStore>) -> Self {
        Self { store, clock: Arc::new(SystemClock) }
    }

    /// Replace the clock (fixed clocks in tests)
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Start a timer for the task.
    ///
    /// # Errors
    /// `TimerAlreadyRunning` when the task already has an active session.
    #[instrument(skip(self))]
    pub async fn start_timer(&self, task_id: TaskId) -> Result<ActiveTimer> {
        let now = self.clock.now();
        match self.store.start(task_id, now).await {
            Ok(timer) => {
                info!(task_id, start_time = %timer.start_time, "timer started");
                Ok(timer)
            }
            Err(err) => {
                warn!(task_id, error = %err, "timer start rejected");
                Err(err)
            }
        }
    }

    /// Stop the running timer and return the recorded session.
    ///
    /// # Errors
    /// `NoActiveTimer` when nothing is running for the task.
    #[instrument(skip(self))]
    pub async fn stop_timer(&self, task_id: TaskId) -> Result<TimeLog> {
        let now = self.clock.now();
        match self.store.stop(task_id, now).await {
            Ok(log) => {
                if log.end_time < log.start_time {
                    warn!(task_id, "clock moved backwards, session recorded as zero length");
                }
                info!(task_id, duration_ms = log.duration, "timer stopped");
                Ok(log)
            }
            Err(err) => {
                warn!(task_id, error = %err, "timer stop rejected");
                Err(err)
            }
        }
    }

    /// Completed sessions for the task, oldest first.
    pub async fn get_time_logs(&self, task_id: TaskId) -> Vec<TimeLog> {
        self.store.state(task_id).await.time_logs
    }

    pub async fn timer_state(&self, task_id: TaskId) -> TimerState {
        self.store.state(task_id).await
    }

    /// Forget everything tracked for the task.
    pub async fn delete_timer_state(&self, task_id: TaskId) -> bool {
        let removed = self.store.remove(task_id).await;
        if removed {
            info!(task_id, "timer state deleted");
        }
        removed
    }
}
