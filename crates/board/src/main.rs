//! Board - command-line access to the Board business-management API
//!
//! Main entry point for the `board` CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{branches, clients, invoices, payments, projects};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Board - command-line access to the Board business-management API
#[derive(Parser)]
#[command(name = "board")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// API key
    #[arg(long, global = true, env = "BOARD_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API token
    #[arg(long, global = true, env = "BOARD_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// API base URL (default: https://api.the-board.jp/v1)
    #[arg(long, global = true, env = "BOARD_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Client (customer) management
    Clients(clients::ClientsArgs),

    /// Client branch lookup
    Branches(branches::BranchesArgs),

    /// Project management
    Projects(projects::ProjectsArgs),

    /// Invoice listing and status changes
    Invoices(invoices::InvoicesArgs),

    /// Expenditure payment listing, status and lock changes
    Payments(payments::PaymentsArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so --json output stays clean. RUST_LOG applies unless -v is given.
    let filter = if cli.verbose {
        EnvFilter::new("board=debug,board_client=debug,warn")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("board=info,board_client=info,warn"))
    };

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();

    let ctx = commands::Context {
        api_key: cli.api_key,
        api_token: cli.api_token,
        base_url: cli.base_url,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Clients(args) => clients::run(args, &ctx).await,
        Commands::Branches(args) => branches::run(args, &ctx).await,
        Commands::Projects(args) => projects::run(args, &ctx).await,
        Commands::Invoices(args) => invoices::run(args, &ctx).await,
        Commands::Payments(args) => payments::run(args, &ctx).await,
    }
}
