//! Per-task time tracking state
//!
//! A [`TimerState`] holds the accumulated tracked time for one task, the
//! in-progress session (if any) and the completed sessions in completion
//! order. The transitions here enforce the single-active-timer rule; callers
//! that share state across requests are responsible for serializing calls
//! per task.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TaskId;
use crate::errors::{ClientDeskError, Result};

/// In-progress logging session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTimer {
    pub task_id: TaskId,
    pub start_time: DateTime<Utc>,
}

/// Completed logging session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Milliseconds, never negative
    pub duration: i64,
    /// UTC calendar date the session started on
    pub date: NaiveDate,
}

/// Accumulated timer state for a single task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    /// Sum of all completed session durations, in milliseconds
    pub total_time: i64,
    pub active_timer: Option<ActiveTimer>,
    pub time_logs: Vec<TimeLog>,
}

impl TimerState {
    pub fn is_running(&self) -> bool {
        self.active_timer.is_some()
    }

    /// Begin a session at `now`.
    ///
    /// # Errors
    /// `TimerAlreadyRunning` if a session is already active; the existing
    /// session is left untouched.
    pub fn start(&mut self, task_id: TaskId, now: DateTime<Utc>) -> Result<ActiveTimer> {
        if self.active_timer.is_some() {
            return Err(ClientDeskError::TimerAlreadyRunning(task_id));
        }

        let timer = ActiveTimer { task_id, start_time: now };
        self.active_timer = Some(timer.clone());
        Ok(timer)
    }

    /// End the active session at `now` and record it.
    ///
    /// A clock that moved backwards yields a zero-length session rather than
    /// a negative one, so `total_time` never decreases.
    ///
    /// # Errors
    /// `NoActiveTimer` if nothing is running; state is unchanged.
    pub fn stop(&mut self, task_id: TaskId, now: DateTime<Utc>) -> Result<TimeLog> {
        let timer = self.active_timer.take().ok_or(ClientDeskError::NoActiveTimer(task_id))?;

        let duration = (now - timer.start_time).num_milliseconds().max(0);
        let log = TimeLog {
            id: Uuid::now_v7(),
            start_time: timer.start_time,
            end_time: now,
            duration,
            date: timer.start_time.date_naive(),
        };

        self.time_logs.push(log.clone());
        self.total_time += duration;
        Ok(log)
    }
}
