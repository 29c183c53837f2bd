use tracing::info;

use super::{Database, Reference};
use crate::error::LedgerResult;
use crate::models::{
    checked_amount, optional_text, NewSupplierTransaction, SupplierTransaction,
};

const SELECT_TRANSACTIONS: &str =
    "SELECT id, supplier_id, date, description, amount, type FROM supplier_transactions";

impl Database {
    pub async fn create_supplier_transaction(
        &self,
        transaction: &NewSupplierTransaction,
    ) -> LedgerResult<i64> {
        let amount = checked_amount("amount", transaction.amount)?;
        let supplier_id = self
            .resolve_required(Reference::Supplier, "supplier_id", transaction.supplier_id)
            .await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO supplier_transactions (supplier_id, date, description, amount, type)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(supplier_id)
        .bind(transaction.date)
        .bind(optional_text(transaction.description.as_deref()))
        .bind(amount)
        .bind(transaction.kind)
        .fetch_one(self.get_pool())
        .await?;

        info!(id, supplier_id, amount, kind = %transaction.kind, "supplier transaction recorded");
        Ok(id)
    }

    /// Latest first
    pub async fn list_supplier_transactions(&self) -> LedgerResult<Vec<SupplierTransaction>> {
        let transactions = sqlx::query_as::<_, SupplierTransaction>(&format!(
            "{SELECT_TRANSACTIONS} ORDER BY date DESC, id DESC"
        ))
        .fetch_all(self.get_pool())
        .await?;

        Ok(transactions)
    }

    pub async fn list_transactions_for_supplier(
        &self,
        supplier_id: i64,
    ) -> LedgerResult<Vec<SupplierTransaction>> {
        let transactions = sqlx::query_as::<_, SupplierTransaction>(&format!(
            "{SELECT_TRANSACTIONS} WHERE supplier_id = ? ORDER BY date DESC, id DESC"
        ))
        .bind(supplier_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(transactions)
    }
}
