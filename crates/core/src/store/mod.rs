//! Remote record store boundary

pub mod ports;

pub use ports::RecordStore;
