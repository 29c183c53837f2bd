use tracing::info;

use super::{Database, Reference};
use crate::error::LedgerResult;
use crate::models::{optional_text, NewProjectTask, ProjectTask, OPEN_STATUS};

const SELECT_TASKS: &str =
    "SELECT id, project_id, title, description, status, due_date FROM project_tasks";

impl Database {
    pub async fn create_task(&self, task: &NewProjectTask) -> LedgerResult<i64> {
        let title = task.title.trim().to_string();
        let status = optional_text(task.status.as_deref())
            .unwrap_or_else(|| OPEN_STATUS.to_string());
        let project_id = self
            .resolve_required(Reference::Project, "project_id", task.project_id)
            .await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO project_tasks (project_id, title, description, status, due_date)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(project_id)
        .bind(&title)
        .bind(optional_text(task.description.as_deref()))
        .bind(&status)
        .bind(task.due_date)
        .fetch_one(self.get_pool())
        .await?;

        info!(id, project_id, %title, %status, "task created");
        Ok(id)
    }

    /// Ordered by status, then nearest due date
    pub async fn list_tasks(&self) -> LedgerResult<Vec<ProjectTask>> {
        let tasks = sqlx::query_as::<_, ProjectTask>(&format!(
            "{SELECT_TASKS} ORDER BY status ASC, due_date ASC, id ASC"
        ))
        .fetch_all(self.get_pool())
        .await?;

        Ok(tasks)
    }

    pub async fn list_tasks_for_project(&self, project_id: i64) -> LedgerResult<Vec<ProjectTask>> {
        let tasks = sqlx::query_as::<_, ProjectTask>(&format!(
            "{SELECT_TASKS} WHERE project_id = ? ORDER BY status ASC, due_date ASC, id ASC"
        ))
        .bind(project_id)
        .fetch_all(self.get_pool())
        .await?;

        Ok(tasks)
    }
}
