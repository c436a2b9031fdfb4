//! Client management commands

use clientdesk_domain::{Client, ClientChanges, NewClient, RecordId, Result};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

pub async fn list_clients(ctx: &AppContext) -> Result<Vec<Client>> {
    execute_command("clients::list_clients", || ctx.clients.get_all()).await
}

pub async fn get_client(ctx: &AppContext, id: RecordId) -> Result<Client> {
    execute_command("clients::get_client", || ctx.clients.get_by_id(id)).await
}

pub async fn create_client(ctx: &AppContext, client: NewClient) -> Result<Client> {
    execute_command("clients::create_client", || ctx.clients.create(client)).await
}

pub async fn update_client(ctx: &AppContext, id: RecordId, changes: ClientChanges) -> Result<Client> {
    execute_command("clients::update_client", || ctx.clients.update(id, changes)).await
}

pub async fn delete_client(ctx: &AppContext, id: RecordId) -> Result<()> {
    execute_command("clients::delete_client", || ctx.clients.delete(id)).await
}
