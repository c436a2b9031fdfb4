//! Client accessor

use std::sync::Arc;

use clientdesk_domain::constants::{CLIENT_FIELDS, CLIENT_ORDER_FIELD};
use clientdesk_domain::{
    Client, ClientChanges, DeleteParams, NewClient, RecordId, Result, SortOrder, Table,
    WriteParams,
};
use tracing::{debug, info, instrument};

use super::{decode, decode_all, fetch_params, field_params};
use crate::store::RecordStore;

/// CRUD for client records, newest first
pub struct ClientAccessor {
    store: Arc<dyn RecordStore>,
}

impl ClientAccessor {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Client>> {
        let params = fetch_params(CLIENT_FIELDS, CLIENT_ORDER_FIELD, SortOrder::Desc);
        let records = self.store.fetch_records(Table::Client, &params).await?.into_records()?;
        debug!(count = records.len(), "fetched clients");
        decode_all(records)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: RecordId) -> Result<Client> {
        let response =
            self.store.get_record_by_id(Table::Client, id, &field_params(CLIENT_FIELDS)).await?;
        decode(response.into_record(Table::Client, id)?)
    }

    /// Create a client; status defaults to `active`.
    #[instrument(skip(self, client), fields(name = %client.name))]
    pub async fn create(&self, client: NewClient) -> Result<Client> {
        let params = WriteParams::single(&client.into_fields())?;
        let record =
            self.store.create_record(Table::Client, &params).await?.into_first_record("create client")?;
        let created: Client = decode(record)?;
        info!(id = created.id, "client created");
        Ok(created)
    }

    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: RecordId, changes: ClientChanges) -> Result<Client> {
        let params = WriteParams::single(&changes.into_fields(id))?;
        let record =
            self.store.update_record(Table::Client, &params).await?.into_first_record("update client")?;
        info!(id, "client updated");
        decode(record)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.store.delete_record(Table::Client, &DeleteParams::single(id)).await?.ensure_success()?;
        info!(id, "client deleted");
        Ok(())
    }
}
