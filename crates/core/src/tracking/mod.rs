//! Per-task time tracking

pub mod ports;
pub mod service;

pub use ports::{Clock, SystemClock, TimerStore};
pub use service::TimeTrackingService;
