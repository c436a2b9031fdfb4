use std::time::Duration;

use clientdesk_domain::{ClientDeskError, LoggingConfig, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Output goes to stderr so
/// stdout stays clean for command results.
///
/// # Errors
/// `Config` when the filter directive is invalid or a subscriber is already
/// installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|err| {
            ClientDeskError::Config(format!("invalid log level '{}': {err}", config.level))
        })?,
    };

    let builder =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    installed.map_err(|err| {
        ClientDeskError::Config(format!("failed to install tracing subscriber: {err}"))
    })
}

/// Log the outcome of a command execution with structured fields.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&str>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        let error_type = error_type.unwrap_or("unknown");
        warn!(command, duration_ms, error_type, "command_execution_failure");
    }
}

/// Convert a `ClientDeskError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ClientDeskError) -> &'static str {
    match error {
        ClientDeskError::RemoteStore(_) => "remote_store",
        ClientDeskError::WriteRejected(_) => "write_rejected",
        ClientDeskError::TimerAlreadyRunning(_) => "timer_already_running",
        ClientDeskError::NoActiveTimer(_) => "no_active_timer",
        ClientDeskError::Validation(_) => "validation",
        ClientDeskError::Config(_) => "config",
        ClientDeskError::Network(_) => "network",
        ClientDeskError::Auth(_) => "auth",
        ClientDeskError::NotFound(_) => "not_found",
        ClientDeskError::InvalidInput(_) => "invalid_input",
        ClientDeskError::Serialization(_) => "serialization",
        ClientDeskError::Internal(_) => "internal",
    }
}
