use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::table::{or_dash, render};
use crate::db::Database;
use crate::models::{NewProjectTask, ProjectTask};

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Add a task to a project
    Add(AddTaskArgs),
    /// List tasks by status and due date
    List {
        #[arg(long = "project")]
        project_id: Option<i64>,
    },
}

#[derive(Debug, Args)]
pub struct AddTaskArgs {
    #[arg(long = "project")]
    pub project_id: i64,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Defaults to "open"
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long = "due")]
    pub due_date: Option<NaiveDate>,
}

pub async fn run(db: &Database, command: TaskCommand) -> Result<String> {
    match command {
        TaskCommand::Add(args) => {
            let id = db
                .create_task(&NewProjectTask {
                    project_id: args.project_id,
                    title: args.title,
                    description: args.description,
                    status: args.status,
                    due_date: args.due_date,
                })
                .await?;
            Ok(format!("Created task {id}"))
        }
        TaskCommand::List { project_id } => {
            let Some(id) = project_id else {
                return Ok(render_tasks(&db.list_tasks().await?));
            };
            let Some(project) = db.get_project(id).await? else {
                bail!("no project with id {id}");
            };
            let tasks = db.list_tasks_for_project(id).await?;
            Ok(format!("{}\n{}", project.name, render_tasks(&tasks)))
        }
    }
}

fn render_tasks(tasks: &[ProjectTask]) -> String {
    let rows = tasks
        .iter()
        .map(|t| {
            [
                t.id.to_string(),
                t.project_id.to_string(),
                t.title.clone(),
                t.status.clone(),
                t.due_date.map_or_else(|| "-".to_string(), |d| d.to_string()),
                or_dash(t.description.as_deref()),
            ]
        })
        .collect();
    render(["ID", "Project", "Title", "Status", "Due", "Description"], rows)
}
