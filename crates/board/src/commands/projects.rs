//! Projects command - project management.

use anyhow::Result;
use board_client::{ListProjectsQuery, ResponseGroup};
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, PageArgs, or_dash, print_detail, print_done, print_json, print_page};

/// Arguments for the projects command.
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub command: ProjectsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectsCommand {
    /// List projects
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only projects of this client
        #[arg(long, conflicts_with = "branch")]
        client: Option<u64>,

        /// Only projects of this client branch
        #[arg(long)]
        branch: Option<u64>,

        /// Only projects in this status
        #[arg(long)]
        status: Option<String>,
    },

    /// Show a project
    Get {
        /// Project ID
        id: u64,

        /// Detail level (small, medium, large)
        #[arg(long)]
        detail: Option<ResponseGroup>,
    },

    /// Change the status of a project
    SetStatus {
        /// Project ID
        id: u64,

        /// New status
        status: String,
    },

    /// Delete a project
    Delete {
        /// Project ID
        id: u64,
    },
}

/// Run the projects command.
pub async fn run(args: ProjectsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.client()?.projects();
    let dim = Style::new().dim();

    match args.command {
        ProjectsCommand::List {
            page,
            client,
            branch,
            status,
        } => {
            let query = ListProjectsQuery {
                pagination: page.into(),
                status,
                ..Default::default()
            };
            let projects = match (client, branch) {
                (Some(client_id), _) => api.list_by_client(client_id, query).await?,
                (None, Some(branch_id)) => api.list_by_client_branch(branch_id, query).await?,
                (None, None) => api.list_with_query(query).await?,
            };
            print_page(ctx, "Projects", &projects, |p| {
                format!(
                    "{} {} {}",
                    dim.apply_to(format!("[{}]", p.id)),
                    p.name,
                    dim.apply_to(&p.status)
                )
            })
        }
        ProjectsCommand::Get { id, detail } => {
            let project = api.get(id, detail).await?;
            print_detail(
                ctx,
                &project.name,
                &project,
                &[
                    ("ID", project.id.to_string()),
                    ("Code", project.code.clone()),
                    ("Status", project.status.clone()),
                    ("Client", or_dash(project.client_name.as_deref())),
                    ("Branch", or_dash(project.client_branch_name.as_deref())),
                    ("Start", or_dash(project.start_date.as_deref())),
                    ("End", or_dash(project.end_date.as_deref())),
                    ("Updated", project.updated_at.clone()),
                ],
            )
        }
        ProjectsCommand::SetStatus { id, status } => {
            let project = api.update_status(id, status).await?;
            if ctx.json_output {
                return print_json(&project);
            }
            print_done(
                ctx,
                &format!("Project {} is now {}", project.id, project.status),
            )
        }
        ProjectsCommand::Delete { id } => {
            api.delete(id).await?;
            print_done(ctx, &format!("Project {} deleted", id))
        }
    }
}
