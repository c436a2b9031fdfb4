//! Remote record store adapters

pub mod http_store;

pub use http_store::HttpRecordStore;
