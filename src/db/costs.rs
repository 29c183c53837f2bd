use tracing::info;

use super::{Database, Reference};
use crate::error::LedgerResult;
use crate::models::{checked_amount, optional_text, NewProjectExtraCost, ProjectExtraCost};

const SELECT_COSTS: &str =
    "SELECT id, project_id, supplier_id, date, description, amount FROM project_extra_costs";

impl Database {
    pub async fn create_extra_cost(&self, cost: &NewProjectExtraCost) -> LedgerResult<i64> {
        let amount = checked_amount("amount", cost.amount)?;
        let project_id = self
            .resolve_required(Reference::Project, "project_id", cost.project_id)
            .await?;
        let supplier_id = self
            .resolve_optional(Reference::Supplier, "supplier_id", cost.supplier_id)
            .await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO project_extra_costs (project_id, supplier_id, date, description, amount)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(project_id)
        .bind(supplier_id)
        .bind(cost.date)
        .bind(optional_text(cost.description.as_deref()))
        .bind(amount)
        .fetch_one(self.get_pool())
        .await?;

        info!(id, project_id, ?supplier_id, amount, "extra cost recorded");
        Ok(id)
    }

    pub async fn list_extra_costs(&self) -> LedgerResult<Vec<ProjectExtraCost>> {
        let costs = sqlx::query_as::<_, ProjectExtraCost>(&format!(
            "{SELECT_COSTS} ORDER BY date DESC, id DESC"
        ))
        .fetch_all(self.get_pool())
        .await?;

        Ok(costs)
    }

    pub async fn list_extra_costs_for_project(
        &self,
        project_id: i64,
    ) -> LedgerResult<Vec<ProjectExtraCost>> {
        let costs = sqlx::query_as::<_, ProjectExtraCost>(&format!(
            "{SELECT_COSTS} WHERE project_id = ? ORDER BY date DESC, id DESC"
        ))
        .bind(project_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(costs)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use crate::db::{test_support, Database};
    use crate::models::{NewProject, NewProjectExtraCost, NewSupplier};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    async fn project(db: &Database, name: &str) -> i64 {
        db.create_project(&NewProject {
            name: name.to_string(),
            ..Default::default()
        })
        .await
        .unwrap()
    }

    fn cost(
        project_id: i64,
        supplier_id: Option<i64>,
        date: NaiveDate,
        amount: f64,
    ) -> NewProjectExtraCost {
        NewProjectExtraCost {
            project_id,
            supplier_id,
            date,
            description: Some("Scaffolding rental".to_string()),
            amount,
        }
    }

    #[tokio::test]
    async fn stores_cost_with_supplier() {
        let (_dir, db) = test_support::database().await;
        let roof = project(&db, "Roof A").await;
        let acme = db
            .create_supplier(&NewSupplier {
                name: "Acme".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        db.create_extra_cost(&cost(roof, Some(acme), day(3), 250.0))
            .await
            .unwrap();

        let stored = db.list_extra_costs().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].project_id, roof);
        assert_eq!(stored[0].supplier_id, Some(acme));
        assert_eq!(stored[0].amount, 250.0);
    }

    #[tokio::test]
    async fn unknown_supplier_is_stored_as_none() {
        let (_dir, db) = test_support::database().await;
        let roof = project(&db, "Roof A").await;

        db.create_extra_cost(&cost(roof, Some(77), day(3), 10.0))
            .await
            .unwrap();

        let stored = db.list_extra_costs().await.unwrap();
        assert_eq!(stored[0].supplier_id, None);
    }

    #[tokio::test]
    async fn unknown_project_and_negative_amount_are_rejected() {
        let (_dir, db) = test_support::database().await;
        let roof = project(&db, "Roof A").await;

        assert!(db
            .create_extra_cost(&cost(roof + 1, None, day(3), 10.0))
            .await
            .unwrap_err()
            .is_validation());
        assert!(db
            .create_extra_cost(&cost(roof, None, day(3), -1.0))
            .await
            .unwrap_err()
            .is_validation());
        assert!(db.list_extra_costs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_latest_date_first_per_project() {
        let (_dir, db) = test_support::database().await;
        let roof = project(&db, "Roof A").await;
        let annex = project(&db, "Annex").await;

        let old = db
            .create_extra_cost(&cost(roof, None, day(1), 1.0))
            .await
            .unwrap();
        let new = db
            .create_extra_cost(&cost(roof, None, day(9), 2.0))
            .await
            .unwrap();
        db.create_extra_cost(&cost(annex, None, day(5), 3.0))
            .await
            .unwrap();

        let ids: Vec<i64> = db
            .list_extra_costs_for_project(roof)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![new, old]);
        assert_eq!(db.list_extra_costs().await.unwrap().len(), 3);
    }
}
