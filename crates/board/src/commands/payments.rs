//! Payments command - expenditure payment listing, status and lock changes.

use anyhow::Result;
use board_client::{
    ExpenditureStatus, FinancialResponseGroup, ListExpenditurePaymentsQuery, PaymentStatus,
};
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, PageArgs, date_range, print_done, print_page};

/// Arguments for the payments command.
#[derive(Args, Debug)]
pub struct PaymentsArgs {
    #[command(subcommand)]
    pub command: PaymentsCommand,
}

#[derive(Subcommand, Debug)]
pub enum PaymentsCommand {
    /// List expenditure payments
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only payments of this expenditure
        #[arg(long)]
        expenditure: Option<u64>,

        /// Payment statuses, by name or code (e.g. paid,transfer_reserved)
        #[arg(long, value_delimiter = ',')]
        status: Vec<PaymentStatus>,

        /// Expenditure statuses, by name or code
        #[arg(long, value_delimiter = ',')]
        expenditure_status: Vec<ExpenditureStatus>,

        /// Earliest payment date (YYYY-MM-DD)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Latest payment date (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Detail level (small, medium, large, invoice, all)
        #[arg(long)]
        detail: Option<FinancialResponseGroup>,
    },

    /// Change the payment status
    SetStatus {
        /// Payment ID
        id: u64,

        /// New status, by name or code
        status: PaymentStatus,
    },

    /// Lock a payment against edits
    Lock {
        /// Payment ID
        id: u64,
    },

    /// Unlock a payment
    Unlock {
        /// Payment ID
        id: u64,
    },
}

/// Run the payments command.
pub async fn run(args: PaymentsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.client()?.expenditure_payments();
    let dim = Style::new().dim();

    match args.command {
        PaymentsCommand::List {
            page,
            expenditure,
            status,
            expenditure_status,
            from,
            to,
            detail,
        } => {
            let query = ListExpenditurePaymentsQuery {
                pagination: page.into(),
                payment_date: date_range(from, to),
                expenditure_status,
                payment_status: status,
                response_group: detail,
                ..Default::default()
            };
            let payments = match expenditure {
                Some(expenditure_id) => api.list_by_expenditure(expenditure_id, query).await?,
                None => api.list_with_query(query).await?,
            };
            print_page(ctx, "Expenditure payments", &payments, |p| {
                let lock = if p.is_locked() { " [locked]" } else { "" };
                format!(
                    "{} {} {} {} {} {}{}",
                    dim.apply_to(format!("[{}]", p.id)),
                    p.payment_date,
                    p.name,
                    p.total,
                    p.currency,
                    dim.apply_to(&p.payment_status_name),
                    lock
                )
            })
        }
        PaymentsCommand::SetStatus { id, status } => {
            api.update_payment_status(id, status).await?;
            print_done(ctx, &format!("Payment {} is now {}", id, status))
        }
        PaymentsCommand::Lock { id } => {
            api.lock(id).await?;
            print_done(ctx, &format!("Payment {} locked", id))
        }
        PaymentsCommand::Unlock { id } => {
            api.unlock(id).await?;
            print_done(ctx, &format!("Payment {} unlocked", id))
        }
    }
}
