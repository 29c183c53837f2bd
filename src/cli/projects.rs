use anyhow::Result;
use clap::{Args, Subcommand};

use super::table::{or_dash, render};
use crate::db::Database;
use crate::models::{NewProject, Project};

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// Open a project, optionally for a client
    Add(AddProjectArgs),
    /// List projects, latest first
    List,
}

#[derive(Debug, Args)]
pub struct AddProjectArgs {
    #[arg(long)]
    pub name: String,
    /// Client id; an id that does not exist is stored as no client
    #[arg(long = "client")]
    pub client_id: Option<i64>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

pub async fn run(db: &Database, command: ProjectCommand) -> Result<String> {
    match command {
        ProjectCommand::Add(args) => {
            let id = db
                .create_project(&NewProject {
                    name: args.name,
                    client_id: args.client_id,
                    address: args.address,
                    status: args.status,
                    notes: args.notes,
                })
                .await?;
            let project = db.get_project(id).await?;
            let client = match project.and_then(|p| p.client_id) {
                Some(client_id) => db.get_client(client_id).await?,
                None => None,
            };
            Ok(match client {
                Some(client) => format!("Created project {id} for {}", client.name),
                None => format!("Created project {id} without a client"),
            })
        }
        ProjectCommand::List => Ok(render_projects(&db.list_projects().await?)),
    }
}

fn render_projects(projects: &[Project]) -> String {
    let rows = projects
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.client_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                or_dash(p.address.as_deref()),
                or_dash(p.status.as_deref()),
            ]
        })
        .collect();
    render(["ID", "Name", "Client", "Address", "Status"], rows)
}
