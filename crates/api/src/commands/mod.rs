//! Commands - one async function per user-facing operation
//!
//! Each command borrows the [`AppContext`](crate::context::AppContext), runs
//! through [`execute_command`](crate::utils::command_helpers::execute_command)
//! and returns domain results.

mod clients;
mod dashboard;
mod invoices;
mod projects;
mod tasks;
mod tracking;

pub use clients::*;
pub use dashboard::*;
pub use invoices::*;
pub use projects::*;
pub use tasks::*;
pub use tracking::*;
