//! Invoice commands

use clientdesk_domain::{Invoice, InvoiceChanges, NewInvoice, RecordId, Result};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn list_invoices(ctx: &AppContext) -> Result<Vec<Invoice>> {
    execute_command("invoices::list_invoices", || ctx.invoices.get_all()).await
}

pub async fn get_invoice(ctx: &AppContext, id: RecordId) -> Result<Invoice> {
    execute_command("invoices::get_invoice", || ctx.invoices.get_by_id(id)).await
}

pub async fn create_invoice(ctx: &AppContext, invoice: NewInvoice) -> Result<Invoice> {
    execute_command("invoices::create_invoice", || ctx.invoices.create(invoice)).await
}

pub async fn update_invoice(
    ctx: &AppContext,
    id: RecordId,
    changes: InvoiceChanges,
) -> Result<Invoice> {
    execute_command("invoices::update_invoice", || ctx.invoices.update(id, changes)).await
}

pub async fn mark_invoice_sent(ctx: &AppContext, id: RecordId) -> Result<Invoice> {
    execute_command("invoices::mark_invoice_sent", || ctx.invoices.mark_sent(id)).await
}

pub async fn mark_invoice_paid(ctx: &AppContext, id: RecordId, payment_date: &str) -> Result<Invoice> {
    execute_command("invoices::mark_invoice_paid", || ctx.invoices.mark_paid(id, payment_date)).await
}

pub async fn delete_invoice(ctx: &AppContext, id: RecordId) -> Result<()> {
    execute_command("invoices::delete_invoice", || ctx.invoices.delete(id)).await
}
