use tracing::info;

use super::Database;
use crate::error::LedgerResult;
use crate::models::{optional_text, required_text, Client, NewClient};

impl Database {
    pub async fn create_client(&self, client: &NewClient) -> LedgerResult<i64> {
        let name = required_text("name", &client.name)?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO clients (name, tax_id, phone, email, notes)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&name)
        .bind(optional_text(client.tax_id.as_deref()))
        .bind(optional_text(client.phone.as_deref()))
        .bind(optional_text(client.email.as_deref()))
        .bind(optional_text(client.notes.as_deref()))
        .fetch_one(self.get_pool())
        .await?;

        info!(id, %name, "client created");
        Ok(id)
    }

    pub async fn list_clients(&self) -> LedgerResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, tax_id, phone, email, notes FROM clients ORDER BY name ASC, id ASC",
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(clients)
    }

    pub async fn get_client(&self, id: i64) -> LedgerResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, tax_id, phone, email, notes FROM clients WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::db::test_support;
    use crate::models::NewClient;

    fn client(name: &str) -> NewClient {
        NewClient {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_stores_trimmed_fields() {
        let (_dir, db) = test_support::database().await;

        let id = db
            .create_client(&NewClient {
                name: "  Kappa SA ".to_string(),
                tax_id: Some("099999999".to_string()),
                phone: Some("   ".to_string()),
                email: Some("office@kappa.example".to_string()),
                notes: None,
            })
            .await
            .unwrap();

        let stored = db.get_client(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Kappa SA");
        assert_eq!(stored.tax_id.as_deref(), Some("099999999"));
        assert_eq!(stored.phone, None);
        assert_eq!(stored.email.as_deref(), Some("office@kappa.example"));
    }

    #[tokio::test]
    async fn blank_name_is_rejected_without_a_row() {
        let (_dir, db) = test_support::database().await;

        for name in ["", "   "] {
            let err = db.create_client(&client(name)).await.unwrap_err();
            assert!(err.is_validation());
        }

        assert!(db.list_clients().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_is_sorted_by_name() {
        let (_dir, db) = test_support::database().await;
        for name in ["Zeta Homes", "Alpha Build", "Mu Estates"] {
            db.create_client(&client(name)).await.unwrap();
        }

        let names: Vec<String> = db
            .list_clients()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Alpha Build", "Mu Estates", "Zeta Homes"]);
    }

    #[tokio::test]
    async fn ids_increase_per_insert() {
        let (_dir, db) = test_support::database().await;

        let first = db.create_client(&client("A")).await.unwrap();
        let second = db.create_client(&client("B")).await.unwrap();
        assert!(second > first);
        assert!(db.get_client(second + 1).await.unwrap().is_none());
    }
}
