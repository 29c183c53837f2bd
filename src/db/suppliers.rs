use tracing::info;

use super::Database;
use crate::error::LedgerResult;
use crate::models::{optional_text, required_text, NewSupplier, Supplier};

impl Database {
    pub async fn create_supplier(&self, supplier: &NewSupplier) -> LedgerResult<i64> {
        let name = required_text("name", &supplier.name)?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO suppliers (name, tax_id, phone, email, notes)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&name)
        .bind(optional_text(supplier.tax_id.as_deref()))
        .bind(optional_text(supplier.phone.as_deref()))
        .bind(optional_text(supplier.email.as_deref()))
        .bind(optional_text(supplier.notes.as_deref()))
        .fetch_one(self.get_pool())
        .await?;

        info!(id, %name, "supplier created");
        Ok(id)
    }

    pub async fn list_suppliers(&self) -> LedgerResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, tax_id, phone, email, notes FROM suppliers ORDER BY name ASC, id ASC",
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(suppliers)
    }

    pub async fn get_supplier(&self, id: i64) -> LedgerResult<Option<Supplier>> {
        let supplier = sqlx::query_as::<_, Supplier>(
            "SELECT id, name, tax_id, phone, email, notes FROM suppliers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(supplier)
    }
}
