use anyhow::Result;
use clap::{Args, Subcommand};

use super::table::{or_dash, render};
use crate::db::Database;
use crate::models::{Client, NewClient};

#[derive(Debug, Subcommand)]
pub enum ClientCommand {
    /// Register a client
    Add(ContactArgs),
    /// List clients by name
    List,
}

/// Contact fields shared by clients and suppliers
#[derive(Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub tax_id: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

pub async fn run(db: &Database, command: ClientCommand) -> Result<String> {
    match command {
        ClientCommand::Add(args) => {
            let id = db
                .create_client(&NewClient {
                    name: args.name,
                    tax_id: args.tax_id,
                    phone: args.phone,
                    email: args.email,
                    notes: args.notes,
                })
                .await?;
            Ok(format!("Created client {id}"))
        }
        ClientCommand::List => Ok(render_clients(&db.list_clients().await?)),
    }
}

fn render_clients(clients: &[Client]) -> String {
    let rows = clients
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.name.clone(),
                or_dash(c.tax_id.as_deref()),
                or_dash(c.phone.as_deref()),
                or_dash(c.email.as_deref()),
            ]
        })
        .collect();
    render(["ID", "Name", "Tax ID", "Phone", "Email"], rows)
}
