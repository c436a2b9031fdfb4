//! Invoice records and their validation rules
//!
//! Invoice writes are validated before any remote call: a new invoice needs a
//! project, a positive amount and a due date; an update may only change the
//! amount to a positive value.

use serde::{Deserialize, Serialize};

use super::store::RecordRef;
use super::RecordId;
use crate::define_status_enum;
use crate::errors::{ClientDeskError, Result};

define_status_enum! {
    /// Billing status of an invoice
    pub enum InvoiceStatus {
        Draft => "draft",
        Sent => "sent",
        Paid => "paid",
        Overdue => "overdue",
    }
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// Invoice record as returned by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "Id")]
    pub id: RecordId,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<InvoiceStatus>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub client_id: Option<RecordRef>,
    #[serde(default)]
    pub project_id: Option<RecordRef>,
}

impl Invoice {
    pub fn is_paid(&self) -> bool {
        self.status == Some(InvoiceStatus::Paid)
    }

    pub fn is_sent(&self) -> bool {
        self.status == Some(InvoiceStatus::Sent)
    }
}

/// Request to create an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub amount: f64,
    /// Defaults to `draft`
    pub status: Option<InvoiceStatus>,
    pub due_date: Option<String>,
    pub payment_date: Option<String>,
    pub client_id: Option<RecordId>,
    pub project_id: Option<RecordId>,
}

/// Partial update of an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceChanges {
    pub amount: Option<f64>,
    pub status: Option<InvoiceStatus>,
    pub due_date: Option<String>,
    pub payment_date: Option<String>,
    pub client_id: Option<RecordId>,
    pub project_id: Option<RecordId>,
}

/// Invoice columns in store naming
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceFields {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<RecordId>,
}

fn ensure_positive_amount(amount: f64) -> Result<()> {
    // NaN and infinities would serialize as null
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ClientDeskError::Validation("Amount must be greater than 0".into()))
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

impl NewInvoice {
    /// # Errors
    /// `Validation` when the project, a positive amount or the due date is missing.
    pub fn validate(&self) -> Result<()> {
        if self.project_id.is_none() {
            return Err(ClientDeskError::Validation("Project ID is required".into()));
        }
        ensure_positive_amount(self.amount)?;
        if is_blank(self.due_date.as_deref()) {
            return Err(ClientDeskError::Validation("Due date is required".into()));
        }
        Ok(())
    }

    /// Validate and convert to store columns.
    pub fn into_fields(self) -> Result<InvoiceFields> {
        self.validate()?;
        Ok(InvoiceFields {
            id: None,
            amount: Some(self.amount),
            status: Some(self.status.unwrap_or_default()),
            due_date: self.due_date,
            payment_date: self.payment_date.filter(|date| !date.trim().is_empty()),
            client_id: self.client_id,
            project_id: self.project_id,
        })
    }
}

impl InvoiceChanges {
    /// # Errors
    /// `Validation` when an amount is present but not positive.
    pub fn validate(&self) -> Result<()> {
        match self.amount {
            Some(amount) => ensure_positive_amount(amount),
            None => Ok(()),
        }
    }

    /// Validate and convert to store columns; only present fields are sent.
    pub fn into_fields(self, id: RecordId) -> Result<InvoiceFields> {
        self.validate()?;
        Ok(InvoiceFields {
            id: Some(id),
            amount: self.amount,
            status: self.status,
            due_date: self.due_date,
            payment_date: self.payment_date,
            client_id: self.client_id,
            project_id: self.project_id,
        })
    }
}
