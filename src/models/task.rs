use chrono::NaiveDate;

pub const OPEN_STATUS: &str = "open";
pub const DONE_STATUS: &str = "done";

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct ProjectTask {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<NaiveDate>,
}

/// Fields submitted when adding a task; a missing status means "open".
#[derive(Debug, Clone, Default)]
pub struct NewProjectTask {
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDate>,
}
