//! Mutex-backed `TimerStore`

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clientdesk_core::TimerStore;
use clientdesk_domain::{ActiveTimer, ClientDeskError, Result, TaskId, TimeLog, TimerState};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MapTimerStore {
    states: Mutex<HashMap<TaskId, TimerState>>,
}

#[async_trait]
impl TimerStore for MapTimerStore {
    async fn start(&self, task_id: TaskId, now: DateTime<Utc>) -> Result<ActiveTimer> {
        self.states.lock().await.entry(task_id).or_default().start(task_id, now)
    }

    async fn stop(&self, task_id: TaskId, now: DateTime<Utc>) -> Result<TimeLog> {
        match self.states.lock().await.get_mut(&task_id) {
            Some(state) => state.stop(task_id, now),
            None => Err(ClientDeskError::NoActiveTimer(task_id)),
        }
    }

    async fn state(&self, task_id: TaskId) -> TimerState {
        self.states.lock().await.get(&task_id).cloned().unwrap_or_default()
    }

    async fn remove(&self, task_id: TaskId) -> bool {
        self.states.lock().await.remove(&task_id).is_some()
    }
}
