mod clients;
mod costs;
mod projects;
mod reports;
mod suppliers;
mod table;
mod tasks;
mod transactions;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::db::Database;

pub use clients::ClientCommand;
pub use costs::CostCommand;
pub use projects::ProjectCommand;
pub use reports::ReportCommand;
pub use suppliers::SupplierCommand;
pub use tasks::TaskCommand;
pub use transactions::TransactionCommand;

/// Clients, suppliers, projects and their costs for a construction office
#[derive(Debug, Parser)]
#[command(name = "ergon", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database schema if it is missing
    Init,
    /// Clients (employers)
    #[command(subcommand)]
    Client(ClientCommand),
    #[command(subcommand)]
    Supplier(SupplierCommand),
    #[command(subcommand)]
    Project(ProjectCommand),
    /// Supplier invoices and payments
    #[command(subcommand)]
    Txn(TransactionCommand),
    /// Extra costs booked against a project
    #[command(subcommand)]
    Cost(CostCommand),
    #[command(subcommand)]
    Task(TaskCommand),
    /// Balances, cost totals and the project dashboard
    #[command(subcommand)]
    Report(ReportCommand),
}

/// Run one command against the store and print its result
pub async fn run(db: &Database, config: &Config, command: Commands) -> Result<()> {
    let output = execute(db, config, command).await?;
    println!("{output}");
    Ok(())
}

async fn execute(db: &Database, config: &Config, command: Commands) -> Result<String> {
    let output = match command {
        // the schema is brought up to date when the store is opened
        Commands::Init => format!(
            "Database schema is up to date at {}",
            config.database_url()
        ),
        Commands::Client(cmd) => clients::run(db, cmd).await?,
        Commands::Supplier(cmd) => suppliers::run(db, cmd).await?,
        Commands::Project(cmd) => projects::run(db, cmd).await?,
        Commands::Txn(cmd) => transactions::run(db, cmd).await?,
        Commands::Cost(cmd) => costs::run(db, cmd).await?,
        Commands::Task(cmd) => tasks::run(db, cmd).await?,
        Commands::Report(cmd) => reports::run(db, cmd).await?,
    };

    Ok(output)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
