//! Command execution helpers
//!
//! Every command goes through [`execute_command`] so timing and outcome
//! logging stay uniform.

use std::future::Future;
use std::time::Instant;

use clientdesk_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with timing and structured logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn list_clients(ctx: &AppContext) -> Result<Vec<Client>> {
///     execute_command("clients::list_clients", || ctx.clients.get_all()).await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, start.elapsed(), result.is_ok(), error_type);

    result
}
