//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::TaskId;

/// Main error type for ClientDesk
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ClientDeskError {
    /// The remote record store answered with `success: false`.
    #[error("Remote store error: {0}")]
    RemoteStore(String),

    /// At least one record in a write batch was rejected; carries the first
    /// failing record's message.
    #[error("Write rejected: {0}")]
    WriteRejected(String),

    #[error("Timer already running for task {0}")]
    TimerAlreadyRunning(TaskId),

    #[error("No active timer for task {0}")]
    NoActiveTimer(TaskId),

    /// Input rejected before any remote call was attempted.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientDeskError {
    /// True for the "already running" / "no active timer" conditions.
    pub fn is_timer_violation(&self) -> bool {
        matches!(self, Self::TimerAlreadyRunning(_) | Self::NoActiveTimer(_))
    }

    /// True when the failure originated at the remote store or the transport
    /// in front of it.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::RemoteStore(_)
                | Self::WriteRejected(_)
                | Self::Network(_)
                | Self::Auth(_)
                | Self::NotFound(_)
                | Self::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for ClientDeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for ClientDesk operations
pub type Result<T> = std::result::Result<T, ClientDeskError>;
