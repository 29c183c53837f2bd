mod client;
mod supplier;
mod project;
mod supplier_transaction;
mod extra_cost;
mod task;
mod report;

pub use client::{Client, NewClient};
pub use supplier::{NewSupplier, Supplier};
pub use project::{NewProject, Project};
pub use supplier_transaction::{NewSupplierTransaction, SupplierTransaction, TransactionKind};
pub use extra_cost::{NewProjectExtraCost, ProjectExtraCost};
pub use task::{NewProjectTask, ProjectTask, DONE_STATUS, OPEN_STATUS};
pub use report::{DashboardRow, ProjectCost, SupplierBalance};

use crate::error::{LedgerError, LedgerResult};

/// Trim a mandatory text field, rejecting it when nothing is left.
pub(crate) fn required_text(field: &'static str, value: &str) -> LedgerResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Blank optional text is stored as NULL.
pub(crate) fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub(crate) fn checked_amount(field: &'static str, amount: f64) -> LedgerResult<f64> {
    if !amount.is_finite() {
        return Err(LedgerError::validation(field, "must be a finite number"));
    }
    if amount < 0.0 {
        return Err(LedgerError::validation(field, "must not be negative"));
    }
    Ok(amount)
}
