//! Process-local timer store
//!
//! State lives only as long as the process. Each transition runs while the
//! map entry for its task is held, so the read-check-write for one task is
//! never interleaved with another call for the same task; different tasks
//! proceed independently.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clientdesk_core::TimerStore;
use clientdesk_domain::{ActiveTimer, ClientDeskError, Result, TaskId, TimeLog, TimerState};
use dashmap::DashMap;

/// `TimerStore` backed by a concurrent hash map
#[derive(Debug, Default)]
pub struct InMemoryTimerStore {
    states: DashMap<TaskId, TimerState>,
}

impl InMemoryTimerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks with stored state.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[async_trait]
impl TimerStore for InMemoryTimerStore {
    async fn start(&self, task_id: TaskId, now: DateTime<Utc>) -> Result<ActiveTimer> {
        let mut state = self.states.entry(task_id).or_default();
        state.start(task_id, now)
    }

    async fn stop(&self, task_id: TaskId, now: DateTime<Utc>) -> Result<TimeLog> {
        match self.states.get_mut(&task_id) {
            Some(mut state) => state.stop(task_id, now),
            None => Err(ClientDeskError::NoActiveTimer(task_id)),
        }
    }

    async fn state(&self, task_id: TaskId) -> TimerState {
        self.states.get(&task_id).map(|state| state.clone()).unwrap_or_default()
    }

    async fn remove(&self, task_id: TaskId) -> bool {
        self.states.remove(&task_id).is_some()
    }
}
