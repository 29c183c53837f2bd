mod cli;
mod config;
mod db;
mod error;
mod models;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::LedgerError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = config::init()?;
    init_tracing(&config);

    // Open the store once; every command borrows this handle
    let db = db::init(&config).await?;

    match cli::run(&db, &config, cli.command).await {
        Err(err) if is_validation(&err) => {
            // nothing was written
            eprintln!("Rejected: {err}");
            std::process::exit(2);
        }
        result => result,
    }
}

fn is_validation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<LedgerError>()
        .is_some_and(LedgerError::is_validation)
}

/// `RUST_LOG` wins over the configured level. Logs go to stderr so that
/// tables on stdout stay pipeable.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
