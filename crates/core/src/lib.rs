//! # ClientDesk Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the remote record store, the timer
//!   store and the clock
//! - Entity accessors that shape typed requests into store calls
//! - Time tracking service
//! - Dashboard aggregation
//!
//! ## Architecture Principles
//! - Only depends on `clientdesk-domain`
//! - No network or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod accessors;
pub mod dashboard;
pub mod store;
pub mod tracking;

// Re-export specific items to avoid ambiguity
pub use accessors::{ClientAccessor, InvoiceAccessor, ProjectAccessor, TaskAccessor};
pub use dashboard::{aggregate, DashboardService};
pub use store::ports::RecordStore;
pub use tracking::ports::{Clock, SystemClock, TimerStore};
pub use tracking::TimeTrackingService;
