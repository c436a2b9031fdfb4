//! Dashboard statistics

pub mod aggregator;
pub mod service;

pub use aggregator::aggregate;
pub use service::DashboardService;
