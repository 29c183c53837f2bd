use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::table::{money, or_dash, render};
use super::today;
use crate::db::Database;
use crate::models::{NewSupplierTransaction, SupplierTransaction, TransactionKind};

#[derive(Debug, Subcommand)]
pub enum TransactionCommand {
    /// Record an invoice or a payment
    Add(AddTransactionArgs),
    /// List transactions, latest first
    List {
        #[arg(long = "supplier")]
        supplier_id: Option<i64>,
    },
}

#[derive(Debug, Args)]
pub struct AddTransactionArgs {
    #[arg(long = "supplier")]
    pub supplier_id: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,
    #[arg(long, value_enum)]
    pub kind: TransactionKind,
    /// Defaults to today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub description: Option<String>,
}

pub async fn run(db: &Database, command: TransactionCommand) -> Result<String> {
    match command {
        TransactionCommand::Add(args) => {
            let id = db
                .create_supplier_transaction(&NewSupplierTransaction {
                    supplier_id: args.supplier_id,
                    date: args.date.unwrap_or_else(today),
                    description: args.description,
                    amount: args.amount,
                    kind: args.kind,
                })
                .await?;
            Ok(format!("Recorded {} {id}", args.kind))
        }
        TransactionCommand::List { supplier_id } => {
            let Some(id) = supplier_id else {
                return Ok(render_transactions(&db.list_supplier_transactions().await?));
            };
            let Some(supplier) = db.get_supplier(id).await? else {
                bail!("no supplier with id {id}");
            };
            let transactions = db.list_transactions_for_supplier(id).await?;
            Ok(format!("{}\n{}", supplier.name, render_transactions(&transactions)))
        }
    }
}

fn render_transactions(transactions: &[SupplierTransaction]) -> String {
    let rows = transactions
        .iter()
        .map(|t| {
            [
                t.id.to_string(),
                t.date.to_string(),
                t.supplier_id.to_string(),
                t.kind.to_string(),
                money(t.amount),
                money(t.kind.signed(t.amount)),
                or_dash(t.description.as_deref()),
            ]
        })
        .collect();
    render(["ID", "Date", "Supplier", "Type", "Amount", "Balance effect", "Description"], rows)
}
