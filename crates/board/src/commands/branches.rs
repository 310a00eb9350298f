//! Branches command - client branch lookup.

use anyhow::Result;
use board_client::{ListClientBranchesQuery, ResponseGroup};
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, PageArgs, or_dash, print_detail, print_page};

/// Arguments for the branches command.
#[derive(Args, Debug)]
pub struct BranchesArgs {
    #[command(subcommand)]
    pub command: BranchesCommand,
}

#[derive(Subcommand, Debug)]
pub enum BranchesCommand {
    /// List client branches
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only branches of this client
        #[arg(long)]
        client: Option<u64>,

        /// Include archived branches
        #[arg(long)]
        archived: bool,
    },

    /// Show a client branch
    Get {
        /// Branch ID
        id: u64,

        /// Detail level (small, medium, large)
        #[arg(long)]
        detail: Option<ResponseGroup>,
    },
}

/// Run the branches command.
pub async fn run(args: BranchesArgs, ctx: &Context) -> Result<()> {
    let api = ctx.client()?.client_branches();
    let dim = Style::new().dim();

    match args.command {
        BranchesCommand::List {
            page,
            client,
            archived,
        } => {
            let query = ListClientBranchesQuery {
                pagination: page.into(),
                include_archive_flg: archived.then_some(true),
                ..Default::default()
            };
            let branches = match client {
                Some(client_id) => api.list_by_client(client_id, query).await?,
                None => api.list_with_query(query).await?,
            };
            print_page(ctx, "Client branches", &branches, |b| {
                format!(
                    "{} {} {}",
                    dim.apply_to(format!("[{}]", b.id)),
                    b.name,
                    dim.apply_to(format!("client {}", b.client_id))
                )
            })
        }
        BranchesCommand::Get { id, detail } => {
            let branch = api.get(id, detail).await?;
            print_detail(
                ctx,
                &branch.name,
                &branch,
                &[
                    ("ID", branch.id.to_string()),
                    ("Client", branch.client_id.to_string()),
                    ("Code", branch.code.clone()),
                    ("Archived", branch.archive_flg.to_string()),
                    ("Address", or_dash(branch.address.as_deref())),
                    ("Updated", branch.updated_at.clone()),
                ],
            )
        }
    }
}
