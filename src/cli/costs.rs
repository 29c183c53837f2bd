use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::table::{money, or_dash, render};
use super::today;
use crate::db::Database;
use crate::models::{NewProjectExtraCost, ProjectExtraCost};

#[derive(Debug, Subcommand)]
pub enum CostCommand {
    /// Book an extra cost against a project
    Add(AddCostArgs),
    /// List extra costs, latest first
    List {
        #[arg(long = "project")]
        project_id: Option<i64>,
    },
}

#[derive(Debug, Args)]
pub struct AddCostArgs {
    #[arg(long = "project")]
    pub project_id: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,
    #[arg(long = "supplier")]
    pub supplier_id: Option<i64>,
    /// Defaults to today (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub description: Option<String>,
}

pub async fn run(db: &Database, command: CostCommand) -> Result<String> {
    match command {
        CostCommand::Add(args) => {
            let id = db
                .create_extra_cost(&NewProjectExtraCost {
                    project_id: args.project_id,
                    supplier_id: args.supplier_id,
                    date: args.date.unwrap_or_else(today),
                    description: args.description,
                    amount: args.amount,
                })
                .await?;
            Ok(format!("Recorded extra cost {id}"))
        }
        CostCommand::List { project_id } => {
            let Some(id) = project_id else {
                return Ok(render_costs(&db.list_extra_costs().await?));
            };
            let Some(project) = db.get_project(id).await? else {
                bail!("no project with id {id}");
            };
            let costs = db.list_extra_costs_for_project(id).await?;
            Ok(format!("{}\n{}", project.name, render_costs(&costs)))
        }
    }
}

fn render_costs(costs: &[ProjectExtraCost]) -> String {
    let rows = costs
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.date.to_string(),
                c.project_id.to_string(),
                c.supplier_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                money(c.amount),
                or_dash(c.description.as_deref()),
            ]
        })
        .collect();
    render(["ID", "Date", "Project", "Supplier", "Amount", "Description"], rows)
}
