use anyhow::Result;
use clap::Subcommand;

use super::table::{money, or_dash, render};
use crate::db::Database;
use crate::models::{DashboardRow, ProjectCost, SupplierBalance};

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// What is owed to each supplier
    Balances,
    /// Extra costs per project
    Costs,
    /// Costs and task progress per project
    Dashboard,
}

pub async fn run(db: &Database, command: ReportCommand) -> Result<String> {
    let output = match command {
        ReportCommand::Balances => render_balances(&db.supplier_balances().await?),
        ReportCommand::Costs => render_costs(&db.project_costs().await?),
        ReportCommand::Dashboard => render_dashboard(&db.dashboard().await?),
    };
    Ok(output)
}

fn render_balances(rows: &[SupplierBalance]) -> String {
    let rows = rows
        .iter()
        .map(|r| {
            [
                r.supplier_name.clone(),
                money(r.invoiced),
                money(r.paid),
                money(r.balance),
            ]
        })
        .collect();
    render(["Supplier", "Invoiced", "Paid", "Balance"], rows)
}

fn render_costs(rows: &[ProjectCost]) -> String {
    let rows = rows
        .iter()
        .map(|r| {
            [
                r.project_id.to_string(),
                r.project_name.clone(),
                or_dash(r.client_name.as_deref()),
                money(r.total_cost),
            ]
        })
        .collect();
    render(["ID", "Project", "Client", "Total cost"], rows)
}

fn render_dashboard(rows: &[DashboardRow]) -> String {
    let rows = rows
        .iter()
        .map(|r| {
            [
                r.project_id.to_string(),
                r.project_name.clone(),
                or_dash(r.status.as_deref()),
                money(r.total_cost),
                r.open_tasks.to_string(),
                r.done_tasks.to_string(),
            ]
        })
        .collect();
    render(["ID", "Project", "Status", "Cost", "Open", "Done"], rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balances_show_two_decimals() {
        let out = render_balances(&[SupplierBalance {
            supplier_id: 1,
            supplier_name: "Acme".to_string(),
            invoiced: 100.0,
            paid: 40.0,
            balance: 60.0,
        }]);
        assert!(out.contains("Acme"));
        assert!(out.contains("100.00"));
        assert!(out.contains("60.00"));
    }

    #[test]
    fn dashboard_shows_task_counts() {
        let out = render_dashboard(&[DashboardRow {
            project_id: 4,
            project_name: "Roof B".to_string(),
            status: None,
            total_cost: 0.0,
            open_tasks: 1,
            done_tasks: 1,
        }]);
        assert!(out.contains("Roof B"));
        assert!(out.contains("0.00"));
    }
}
