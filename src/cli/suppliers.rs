use anyhow::Result;
use clap::Subcommand;

use super::clients::ContactArgs;
use super::table::{or_dash, render};
use crate::db::Database;
use crate::models::{NewSupplier, Supplier};

#[derive(Debug, Subcommand)]
pub enum SupplierCommand {
    /// Register a supplier
    Add(ContactArgs),
    /// List suppliers by name
    List,
}

pub async fn run(db: &Database, command: SupplierCommand) -> Result<String> {
    match command {
        SupplierCommand::Add(args) => {
            let id = db
                .create_supplier(&NewSupplier {
                    name: args.name,
                    tax_id: args.tax_id,
                    phone: args.phone,
                    email: args.email,
                    notes: args.notes,
                })
                .await?;
            Ok(format!("Created supplier {id}"))
        }
        SupplierCommand::List => Ok(render_suppliers(&db.list_suppliers().await?)),
    }
}

fn render_suppliers(suppliers: &[Supplier]) -> String {
    let rows = suppliers
        .iter()
        .map(|s| {
            [
                s.id.to_string(),
                s.name.clone(),
                or_dash(s.tax_id.as_deref()),
                or_dash(s.phone.as_deref()),
                or_dash(s.email.as_deref()),
            ]
        })
        .collect();
    render(["ID", "Name", "Tax ID", "Phone", "Email"], rows)
}
