use thiserror::Error;

/// Failures surfaced by the repository and report queries.
///
/// Nothing is retried: a failed call leaves the store as it was before the
/// call for validation failures, and as the store left it for the rest.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("schema migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl LedgerError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
