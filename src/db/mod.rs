mod clients;
mod costs;
mod projects;
mod reports;
mod suppliers;
mod tasks;
mod transactions;

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{LedgerError, LedgerResult};

static MIGRATOR: Migrator = sqlx::migrate!();

/// Handle to the record store, built once at startup and passed to every
/// repository and report call.
pub struct Database {
    pool: SqlitePool,
}

/// Tables that other rows may point at.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reference {
    Client,
    Supplier,
    Project,
}

impl Reference {
    fn exists_sql(self) -> &'static str {
        match self {
            Reference::Client => "SELECT COUNT(*) FROM clients WHERE id = ?",
            Reference::Supplier => "SELECT COUNT(*) FROM suppliers WHERE id = ?",
            Reference::Project => "SELECT COUNT(*) FROM projects WHERE id = ?",
        }
    }
}

impl Database {
    /// Open the database named by the configured URL, creating the file if needed
    pub async fn new(config: &Config) -> LedgerResult<Self> {
        let options = SqliteConnectOptions::from_str(config.database_url())?;
        Self::connect(options).await
    }

    pub async fn connect(options: SqliteConnectOptions) -> LedgerResult<Self> {
        let options = options
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create any missing tables. Safe to run against an initialized store.
    pub async fn migrate(&self) -> LedgerResult<()> {
        MIGRATOR.run(self.get_pool()).await?;
        debug!("schema is up to date");
        Ok(())
    }

    async fn exists(&self, reference: Reference, id: i64) -> LedgerResult<bool> {
        let count: i64 = sqlx::query_scalar(reference.exists_sql())
            .bind(id)
            .fetch_one(self.get_pool())
            .await?;
        Ok(count > 0)
    }

    /// A selection that no longer points at a row is treated as no selection.
    pub(crate) async fn resolve_optional(
        &self,
        reference: Reference,
        field: &'static str,
        id: Option<i64>,
    ) -> LedgerResult<Option<i64>> {
        let Some(id) = id else {
            return Ok(None);
        };

        if self.exists(reference, id).await? {
            Ok(Some(id))
        } else {
            warn!(field, id, ?reference, "selected reference not found, storing none");
            Ok(None)
        }
    }

    pub(crate) async fn resolve_required(
        &self,
        reference: Reference,
        field: &'static str,
        id: i64,
    ) -> LedgerResult<i64> {
        if self.exists(reference, id).await? {
            Ok(id)
        } else {
            Err(LedgerError::validation(field, format!("no record with id {id}")))
        }
    }
}

/// Open the store and bring its schema up to date
pub async fn init(config: &Config) -> LedgerResult<Database> {
    let db = Database::new(config).await?;
    db.migrate().await?;
    info!(url = config.database_url(), "database ready");
    Ok(db)
}


#[cfg(test)]
mod tests {
    use super::test_support;
    use super::*;
    use crate::models::{NewClient, NewProject};

    async fn table_names(db: &Database) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(db.get_pool())
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn schema_contains_every_table() {
        let (_dir, db) = test_support::database().await;
        let tables = table_names(&db).await;

        for table in [
            "clients",
            "suppliers",
            "projects",
            "supplier_transactions",
            "project_extra_costs",
            "project_tasks",
        ] {
            assert!(tables.iter().any(|t| t == table), "missing table {table}");
        }
    }

    #[tokio::test]
    async fn rerunning_migrations_keeps_rows_and_tables() {
        let (_dir, db) = test_support::database().await;
        let client_id = db
            .create_client(&NewClient {
                name: "Kappa SA".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        db.create_project(&NewProject {
            name: "Roof A".to_string(),
            client_id: Some(client_id),
            ..Default::default()
        })
        .await
        .unwrap();
        let tables_before = table_names(&db).await;

        db.migrate().await.unwrap();
        db.migrate().await.unwrap();

        assert_eq!(table_names(&db).await, tables_before);
        assert_eq!(db.list_clients().await.unwrap().len(), 1);
        assert_eq!(db.list_projects().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn reopening_an_existing_file_keeps_its_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.db");

        let first = Database::connect(SqliteConnectOptions::new().filename(&path))
            .await
            .unwrap();
        first.migrate().await.unwrap();
        first
            .create_client(&NewClient {
                name: "Kappa SA".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        first.get_pool().close().await;

        let second = Database::connect(SqliteConnectOptions::new().filename(&path))
            .await
            .unwrap();
        second.migrate().await.unwrap();

        let clients = second.list_clients().await.unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Kappa SA");
    }

    #[tokio::test]
    async fn resolve_optional_drops_unknown_ids() {
        let (_dir, db) = test_support::database().await;

        let resolved = db
            .resolve_optional(Reference::Client, "client_id", Some(42))
            .await
            .unwrap();
        assert_eq!(resolved, None);

        let resolved = db
            .resolve_optional(Reference::Client, "client_id", None)
            .await
            .unwrap();
        assert_eq!(resolved, None);
    }

    #[tokio::test]
    async fn resolve_required_rejects_unknown_ids() {
        let (_dir, db) = test_support::database().await;

        let err = db
            .resolve_required(Reference::Project, "project_id", 7)
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
