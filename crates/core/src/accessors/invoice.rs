//! Invoice accessor
//!
//! Invoice writes are validated locally; a rejected request never reaches the
//! store.

use std::sync::Arc;

use chrono::SecondsFormat;
use clientdesk_domain::constants::{INVOICE_FIELDS, INVOICE_ORDER_FIELD};
use clientdesk_domain::{
    parse_due_date, ClientDeskError, DeleteParams, Invoice, InvoiceChanges, InvoiceStatus,
    NewInvoice, RecordId, Result, SortOrder, Table, WriteParams,
};
use tracing::{debug, info, instrument};

use super::{decode, decode_all, fetch_params, field_params};
use crate::store::RecordStore;

/// CRUD and billing transitions for invoices, latest due date first
pub struct InvoiceAccessor {
    store: Arc<dyn RecordStore>,
}

impl InvoiceAccessor {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Invoice>> {
        let params = fetch_params(INVOICE_FIELDS, INVOICE_ORDER_FIELD, SortOrder::Desc);
        let records = self.store.fetch_records(Table::Invoice, &params).await?.into_records()?;
        debug!(count = records.len(), "fetched invoices");
        decode_all(records)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: RecordId) -> Result<Invoice> {
        let response =
            self.store.get_record_by_id(Table::Invoice, id, &field_params(INVOICE_FIELDS)).await?;
        decode(response.into_record(Table::Invoice, id)?)
    }

    /// Validate and create an invoice; status defaults to `draft`.
    ///
    /// # Errors
    /// `Validation` when the project, a positive amount or the due date is
    /// missing. The store is not contacted in that case.
    #[instrument(skip(self, invoice))]
    pub async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        let params = WriteParams::single(&invoice.into_fields()?)?;
        let record = self
            .store
            .create_record(Table::Invoice, &params)
            .await?
            .into_first_record("create invoice")?;
        let created: Invoice = decode(record)?;
        info!(id = created.id, "invoice created");
        Ok(created)
    }

    /// Apply a partial update; only present fields are sent.
    #[instrument(skip(self, changes))]
    pub async fn update(&self, id: RecordId, changes: InvoiceChanges) -> Result<Invoice> {
        let params = WriteParams::single(&changes.into_fields(id)?)?;
        let record = self
            .store
            .update_record(Table::Invoice, &params)
            .await?
            .into_first_record("update invoice")?;
        info!(id, "invoice updated");
        decode(record)
    }

    pub async fn mark_sent(&self, id: RecordId) -> Result<Invoice> {
        self.update(id, InvoiceChanges { status: Some(InvoiceStatus::Sent), ..Default::default() })
            .await
    }

    /// Mark paid on `payment_date`, normalized to an RFC 3339 UTC timestamp.
    ///
    /// # Errors
    /// `Validation` when the payment date is blank or cannot be parsed.
    pub async fn mark_paid(&self, id: RecordId, payment_date: &str) -> Result<Invoice> {
        if payment_date.trim().is_empty() {
            return Err(ClientDeskError::Validation("Payment date is required".into()));
        }
        let paid_on = parse_due_date(payment_date).ok_or_else(|| {
            ClientDeskError::Validation(format!("Invalid payment date: {payment_date}"))
        })?;

        self.update(
            id,
            InvoiceChanges {
                status: Some(InvoiceStatus::Paid),
                payment_date: Some(paid_on.to_rfc3339_opts(SecondsFormat::Millis, true)),
                ..Default::default()
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.store.delete_record(Table::Invoice, &DeleteParams::single(id)).await?.ensure_success()?;
        info!(id, "invoice deleted");
        Ok(())
    }
}
