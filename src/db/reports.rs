//! Aggregate views over the base tables.
//!
//! Every view keeps all parent rows through a LEFT JOIN and coalesces empty
//! sums to zero, so a supplier or project without child rows still reports.
//! Nothing is cached; each call reads the current tables.

use tracing::debug;

use super::Database;
use crate::error::LedgerResult;
use crate::models::{DashboardRow, ProjectCost, SupplierBalance, DONE_STATUS, OPEN_STATUS};

impl Database {
    /// Invoices minus payments for every supplier, by supplier name
    pub async fn supplier_balances(&self) -> LedgerResult<Vec<SupplierBalance>> {
        let rows = sqlx::query_as::<_, SupplierBalance>(
            r#"
            SELECT
                s.id AS supplier_id,
                s.name AS supplier_name,
                CAST(COALESCE(SUM(CASE WHEN t.type = 'invoice' THEN t.amount END), 0) AS REAL) AS invoiced,
                CAST(COALESCE(SUM(CASE WHEN t.type = 'payment' THEN t.amount END), 0) AS REAL) AS paid,
                CAST(COALESCE(SUM(
                    CASE t.type
                        WHEN 'invoice' THEN t.amount
                        WHEN 'payment' THEN -t.amount
                        ELSE 0
                    END
                ), 0) AS REAL) AS balance
            FROM suppliers s
            LEFT JOIN supplier_transactions t ON t.supplier_id = s.id
            GROUP BY s.id, s.name
            ORDER BY s.name ASC, s.id ASC
            "#,
        )
        .fetch_all(self.get_pool())
        .await?;

        debug!(rows = rows.len(), "supplier balances computed");
        Ok(rows)
    }

    /// Extra costs summed per project, latest project first
    pub async fn project_costs(&self) -> LedgerResult<Vec<ProjectCost>> {
        let rows = sqlx::query_as::<_, ProjectCost>(
            r#"
            SELECT
                p.id AS project_id,
                p.name AS project_name,
                c.name AS client_name,
                CAST(COALESCE(SUM(e.amount), 0) AS REAL) AS total_cost
            FROM projects p
            LEFT JOIN clients c ON c.id = p.client_id
            LEFT JOIN project_extra_costs e ON e.project_id = p.id
            GROUP BY p.id, p.name, c.name
            ORDER BY p.id DESC
            "#,
        )
        .fetch_all(self.get_pool())
        .await?;

        debug!(rows = rows.len(), "project costs computed");
        Ok(rows)
    }

    /// Per project: cost total and open/done task counts.
    ///
    /// Costs and task counts are grouped separately before joining so that
    /// one side never multiplies the other.
    pub async fn dashboard(&self) -> LedgerResult<Vec<DashboardRow>> {
        let rows = sqlx::query_as::<_, DashboardRow>(
            r#"
            SELECT
                p.id AS project_id,
                p.name AS project_name,
                p.status AS status,
                CAST(COALESCE(costs.total_cost, 0) AS REAL) AS total_cost,
                COALESCE(open_tasks.n, 0) AS open_tasks,
                COALESCE(done_tasks.n, 0) AS done_tasks
            FROM projects p
            LEFT JOIN (
                SELECT project_id, SUM(amount) AS total_cost
                FROM project_extra_costs
                GROUP BY project_id
            ) costs ON costs.project_id = p.id
            LEFT JOIN (
                SELECT project_id, COUNT(*) AS n
                FROM project_tasks
                WHERE status = ?
                GROUP BY project_id
            ) open_tasks ON open_tasks.project_id = p.id
            LEFT JOIN (
                SELECT project_id, COUNT(*) AS n
                FROM project_tasks
                WHERE status = ?
                GROUP BY project_id
            ) done_tasks ON done_tasks.project_id = p.id
            ORDER BY p.id DESC
            "#,
        )
        .bind(OPEN_STATUS)
        .bind(DONE_STATUS)
        .fetch_all(self.get_pool())
        .await?;

        debug!(rows = rows.len(), "dashboard computed");
        Ok(rows)
    }
}
