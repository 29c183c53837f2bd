use tracing::info;

use super::{Database, Reference};
use crate::error::LedgerResult;
use crate::models::{optional_text, required_text, NewProject, Project};

impl Database {
    pub async fn create_project(&self, project: &NewProject) -> LedgerResult<i64> {
        let name = required_text("name", &project.name)?;
        let client_id = self
            .resolve_optional(Reference::Client, "client_id", project.client_id)
            .await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO projects (name, client_id, address, status, notes)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&name)
        .bind(client_id)
        .bind(optional_text(project.address.as_deref()))
        .bind(optional_text(project.status.as_deref()))
        .bind(optional_text(project.notes.as_deref()))
        .fetch_one(self.get_pool())
        .await?;

        info!(id, %name, ?client_id, "project created");
        Ok(id)
    }

    /// Most recently created first
    pub async fn list_projects(&self) -> LedgerResult<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, name, client_id, address, status, notes FROM projects ORDER BY id DESC",
        )
        .fetch_all(self.get_pool())
        .await?;

        Ok(projects)
    }

    pub async fn get_project(&self, id: i64) -> LedgerResult<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            "SELECT id, name, client_id, address, status, notes FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.get_pool())
        .await?;

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::db::test_support;
    use crate::models::{NewClient, NewProject};

    fn project(name: &str, client_id: Option<i64>) -> NewProject {
        NewProject {
            name: name.to_string(),
            client_id,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn stores_selected_client() {
        let (_dir, db) = test_support::database().await;
        let client_id = db
            .create_client(&NewClient {
                name: "Kappa SA".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        let id = db
            .create_project(&NewProject {
                name: "Roof A".to_string(),
                client_id: Some(client_id),
                address: Some("12 Odos Ermou".to_string()),
                status: Some("in progress".to_string()),
                notes: None,
            })
            .await
            .unwrap();

        let stored = db.get_project(id).await.unwrap().unwrap();
        assert_eq!(stored.client_id, Some(client_id));
        assert_eq!(stored.status.as_deref(), Some("in progress"));
    }

    #[tokio::test]
    async fn unknown_client_is_stored_as_none() {
        let (_dir, db) = test_support::database().await;

        let id = db.create_project(&project("Roof A", Some(99))).await.unwrap();

        let stored = db.get_project(id).await.unwrap().unwrap();
        assert_eq!(stored.client_id, None);
    }

    #[tokio::test]
    async fn empty_name_is_rejected_without_a_row() {
        let (_dir, db) = test_support::database().await;

        let err = db.create_project(&project("\t", None)).await.unwrap_err();
        assert!(err.is_validation());
        assert!(db.list_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_puts_latest_project_first() {
        let (_dir, db) = test_support::database().await;
        let first = db.create_project(&project("Roof A", None)).await.unwrap();
        let second = db.create_project(&project("Annex", None)).await.unwrap();
        let third = db.create_project(&project("Basement", None)).await.unwrap();

        let ids: Vec<i64> = db
            .list_projects()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![third, second, first]);
    }
}
