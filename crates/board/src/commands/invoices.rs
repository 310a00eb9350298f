//! Invoices command - invoice listing and status changes.

use anyhow::Result;
use board_client::{FinancialResponseGroup, InvoiceStatus, ListInvoicesQuery, OrderStatus};
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, PageArgs, date_range, print_done, print_page};

/// Arguments for the invoices command.
#[derive(Args, Debug)]
pub struct InvoicesArgs {
    #[command(subcommand)]
    pub command: InvoicesCommand,
}

#[derive(Subcommand, Debug)]
pub enum InvoicesCommand {
    /// List invoices
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only invoices of this project
        #[arg(long)]
        project: Option<u64>,

        /// Invoice statuses, by name or code (e.g. billed,paid)
        #[arg(long, value_delimiter = ',')]
        status: Vec<InvoiceStatus>,

        /// Project order statuses, by name or code
        #[arg(long, value_delimiter = ',')]
        order_status: Vec<OrderStatus>,

        /// Earliest invoice date (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Latest invoice date (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Detail level (small, medium, large, invoice, all)
        #[arg(long)]
        detail: Option<FinancialResponseGroup>,
    },

    /// Change the status of an invoice
    SetStatus {
        /// Invoice ID
        id: u64,

        /// New status, by name or code
        status: InvoiceStatus,
    },
}

/// Run the invoices command.
pub async fn run(args: InvoicesArgs, ctx: &Context) -> Result<()> {
    let api = ctx.client()?.invoices();
    let dim = Style::new().dim();

    match args.command {
        InvoicesCommand::List {
            page,
            project,
            status,
            order_status,
            from,
            to,
            detail,
        } => {
            let query = ListInvoicesQuery {
                pagination: page.into(),
                invoice_date: date_range(from, to),
                order_status,
                invoice_status: status,
                response_group: detail,
                ..Default::default()
            };
            let invoices = match project {
                Some(project_id) => api.list_by_project(project_id, query).await?,
                None => api.list_with_query(query).await?,
            };
            print_page(ctx, "Invoices", &invoices, |i| {
                format!(
                    "{} {} {} {} {} {}",
                    dim.apply_to(format!("[{}]", i.id)),
                    i.invoice_date,
                    i.name,
                    i.total,
                    i.currency,
                    dim.apply_to(&i.invoice_status_name)
                )
            })
        }
        InvoicesCommand::SetStatus { id, status } => {
            api.update_status(id, status).await?;
            print_done(ctx, &format!("Invoice {} is now {}", id, status))
        }
    }
}
