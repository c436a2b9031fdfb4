//! # ClientDesk App
//!
//! Application layer - commands, wiring and the command-line entry point.
//!
//! This crate contains:
//! - Commands (one async function per user-facing operation)
//! - Application context (dependency injection)
//! - Command-line parsing for the `clientdesk` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use cli::CliCommand;
pub use commands::*;
pub use context::*;
