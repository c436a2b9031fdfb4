//! # ClientDesk Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The HTTP adapter for the hosted record store
//! - The in-memory timer store
//! - Configuration loading from environment and files
//! - Conversions from transport errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `clientdesk-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod store;
pub mod tracking;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use store::HttpRecordStore;
pub use tracking::InMemoryTimerStore;
