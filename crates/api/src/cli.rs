//! Command-line surface of the `clientdesk` binary

use std::fmt;
use std::str::FromStr;

use clientdesk_domain::{ClientDeskError, Result};
use serde_json::Value;

use crate::commands;
use crate::context::AppContext;

pub const USAGE: &str = "usage: clientdesk <dashboard|clients|projects|tasks|invoices>";

/// What the binary was asked to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    Dashboard,
    Clients,
    Projects,
    Tasks,
    Invoices,
}

impl CliCommand {
    /// Parse the process arguments (without the program name).
    ///
    /// # Errors
    /// `InvalidInput` carrying the usage line when the arguments are missing,
    /// unknown, or more than one.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(command), None) => command.parse(),
            _ => Err(ClientDeskError::InvalidInput(USAGE.to_string())),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Clients => "clients",
            Self::Projects => "projects",
            Self::Tasks => "tasks",
            Self::Invoices => "invoices",
        }
    }
}

impl fmt::Display for CliCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CliCommand {
    type Err = ClientDeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Self::Dashboard),
            "clients" => Ok(Self::Clients),
            "projects" => Ok(Self::Projects),
            "tasks" => Ok(Self::Tasks),
            "invoices" => Ok(Self::Invoices),
            other => Err(ClientDeskError::InvalidInput(format!("unknown command '{other}'; {USAGE}"))),
        }
    }
}

/// Run a command and return its output as JSON.
pub async fn run(ctx: &AppContext, command: CliCommand) -> Result<Value> {
    let value = match command {
        CliCommand::Dashboard => serde_json::to_value(commands::get_dashboard_data(ctx).await?)?,
        CliCommand::Clients => serde_json::to_value(commands::list_clients(ctx).await?)?,
        CliCommand::Projects => serde_json::to_value(commands::list_projects(ctx).await?)?,
        CliCommand::Tasks => serde_json::to_value(commands::list_tasks(ctx).await?)?,
        CliCommand::Invoices => serde_json::to_value(commands::list_invoices(ctx).await?)?,
    };
    Ok(value)
}
