use chrono::NaiveDate;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct ProjectExtraCost {
    pub id: i64,
    pub project_id: i64,
    pub supplier_id: Option<i64>,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,
}

#[derive(Debug, Clone)]
pub struct NewProjectExtraCost {
    pub project_id: i64,
    pub supplier_id: Option<i64>,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub amount: f64,
}
