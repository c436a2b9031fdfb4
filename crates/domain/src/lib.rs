//! # ClientDesk Domain
//!
//! Business domain types and models for ClientDesk.
//!
//! This crate contains:
//! - Entity records (clients, projects, tasks, invoices) and their request types
//! - Timer state for per-task time tracking
//! - Remote record store wire envelopes
//! - Domain error types and Result definitions
//! - Configuration structures and domain constants
//!
//! ## Architecture
//! - No dependencies on other ClientDesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::dates::parse_due_date;
