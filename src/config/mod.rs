use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

/// Configuration for the application
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Location of the SQLite database file
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database_url() -> String {
    "sqlite://erp_ergon.db".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Variables in a `.env` file are loaded first if the file exists.
    /// Missing variables fall back to their defaults.
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Get a direct reference to the database URL
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    Config::load()
}
