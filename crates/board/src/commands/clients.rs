//! Clients command - customer management.

use anyhow::Result;
use board_client::{ListClientsQuery, ResponseGroup};
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, PageArgs, or_dash, print_detail, print_done, print_json, print_page};

/// Arguments for the clients command.
#[derive(Args, Debug)]
pub struct ClientsArgs {
    #[command(subcommand)]
    pub command: ClientsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ClientsCommand {
    /// List clients
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Include archived clients
        #[arg(long)]
        archived: bool,

        /// Detail level (small, medium, large)
        #[arg(long)]
        detail: Option<ResponseGroup>,
    },

    /// Show a client
    Get {
        /// Client ID
        id: u64,

        /// Detail level (small, medium, large)
        #[arg(long)]
        detail: Option<ResponseGroup>,
    },

    /// Archive a client
    Archive {
        /// Client ID
        id: u64,
    },

    /// Restore an archived client
    Unarchive {
        /// Client ID
        id: u64,
    },

    /// Delete a client
    Delete {
        /// Client ID
        id: u64,
    },
}

/// Run the clients command.
pub async fn run(args: ClientsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.client()?.clients();
    let dim = Style::new().dim();

    match args.command {
        ClientsCommand::List {
            page,
            archived,
            detail,
        } => {
            let query = ListClientsQuery {
                pagination: page.into(),
                include_archive_flg: archived.then_some(true),
                response_group: detail,
            };
            let clients = api.list_with_query(query).await?;
            print_page(ctx, "Clients", &clients, |c| {
                let archived = if c.archive_flg { " (archived)" } else { "" };
                format!(
                    "{} {} {}{}",
                    dim.apply_to(format!("[{}]", c.id)),
                    c.name,
                    dim.apply_to(&c.code),
                    archived
                )
            })
        }
        ClientsCommand::Get { id, detail } => {
            let client = api.get(id, detail).await?;
            print_detail(
                ctx,
                &client.name,
                &client,
                &[
                    ("ID", client.id.to_string()),
                    ("Code", client.code.clone()),
                    ("Kana", client.name_kana.clone()),
                    ("Short name", client.short_name.clone()),
                    ("Archived", client.archive_flg.to_string()),
                    ("Address", or_dash(client.address.as_deref())),
                    ("Tel", or_dash(client.tel.as_deref())),
                    ("Updated", client.updated_at.clone()),
                ],
            )
        }
        ClientsCommand::Archive { id } => {
            let client = api.archive(id).await?;
            if ctx.json_output {
                return print_json(&client);
            }
            print_done(ctx, &format!("Client {} archived", client.id))
        }
        ClientsCommand::Unarchive { id } => {
            let client = api.unarchive(id).await?;
            if ctx.json_output {
                return print_json(&client);
            }
            print_done(ctx, &format!("Client {} restored", client.id))
        }
        ClientsCommand::Delete { id } => {
            api.delete(id).await?;
            print_done(ctx, &format!("Client {} deleted", id))
        }
    }
}
