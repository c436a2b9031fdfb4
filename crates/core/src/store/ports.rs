//! Port interface for the hosted record store
//!
//! The store exposes generic CRUD over named tables. Implementations return
//! the raw envelope; accessors decide what `success: false` means for the
//! caller. An `Err` from any method is a transport-level failure.

use async_trait::async_trait;
use clientdesk_domain::{
    DeleteParams, DeleteResponse, FetchParams, FetchResponse, FieldParams, GetResponse, RecordId,
    Result, Table, WriteParams, WriteResponse,
};

/// Generic CRUD against the remote record store
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch all records of a table with the requested columns and ordering
    async fn fetch_records(&self, table: Table, params: &FetchParams) -> Result<FetchResponse>;

    /// Fetch a single record by id
    async fn get_record_by_id(
        &self,
        table: Table,
        id: RecordId,
        params: &FieldParams,
    ) -> Result<GetResponse>;

    /// Create the records in `params.records`
    async fn create_record(&self, table: Table, params: &WriteParams) -> Result<WriteResponse>;

    /// Update the records in `params.records`; each must carry its `Id`
    async fn update_record(&self, table: Table, params: &WriteParams) -> Result<WriteResponse>;

    /// Delete records by id
    async fn delete_record(&self, table: Table, params: &DeleteParams) -> Result<DeleteResponse>;
}
