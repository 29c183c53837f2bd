/// Amount owed to one supplier.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct SupplierBalance {
    pub supplier_id: i64,
    pub supplier_name: String,
    pub invoiced: f64,
    pub paid: f64,
    pub balance: f64,
}

/// Sum of the extra costs booked against one project.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct ProjectCost {
    pub project_id: i64,
    pub project_name: String,
    pub client_name: Option<String>,
    pub total_cost: f64,
}

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct DashboardRow {
    pub project_id: i64,
    pub project_name: String,
    pub status: Option<String>,
    pub total_cost: f64,
    pub open_tasks: i64,
    pub done_tasks: i64,
}
