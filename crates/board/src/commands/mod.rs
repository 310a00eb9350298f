//! CLI command handlers.

pub mod branches;
pub mod clients;
pub mod invoices;
pub mod payments;
pub mod projects;

use anyhow::{Context as _, Result};
use board_client::{BoardClient, DateRange, ListResponse, Pagination};
use clap::Args;
use console::{Style, style};
use serde::Serialize;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// API key from `--api-key` or `BOARD_API_KEY`.
    pub api_key: Option<String>,
    /// API token from `--api-token` or `BOARD_API_TOKEN`.
    pub api_token: Option<String>,
    /// Base URL override.
    pub base_url: Option<String>,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build an API client from the resolved credentials.
    pub fn client(&self) -> Result<BoardClient> {
        let mut builder = BoardClient::builder();
        if let Some(key) = &self.api_key {
            builder = builder.api_key(key);
        }
        if let Some(token) = &self.api_token {
            builder = builder.api_token(token);
        }
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        let client = builder.build().context("failed to create API client")?;

        tracing::debug!(base_url = %client.base_url(), "client ready");
        Ok(client)
    }
}

/// Page selection shared by every `list` subcommand.
#[derive(Args, Debug, Clone, Copy)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl From<PageArgs> for Pagination {
    fn from(args: PageArgs) -> Self {
        Pagination {
            page: args.page,
            per_page: args.per_page,
        }
    }
}

/// Combine `--from` / `--to` into a date range. Both ends are required together.
pub fn date_range(from: Option<String>, to: Option<String>) -> Option<DateRange> {
    match (from, to) {
        (Some(from), Some(to)) => Some(DateRange::new(from, to)),
        _ => None,
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a page of items: JSON in scripting mode, otherwise a titled listing.
pub fn print_page<T, F>(ctx: &Context, title: &str, page: &ListResponse<T>, line: F) -> Result<()>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    if ctx.json_output {
        return print_json(page);
    }

    let dim = Style::new().dim();
    println!("{}", style(title).bold());
    println!("{}", dim.apply_to("─".repeat(50)));
    println!();

    if page.is_empty() {
        println!("{}", dim.apply_to("Nothing found"));
        return Ok(());
    }

    for item in &page.items {
        println!("{}", line(item));
    }
    println!();
    println!(
        "{}",
        dim.apply_to(format!(
            "page {}/{} · {} total",
            page.current_page, page.last_page, page.total
        ))
    );
    if ctx.verbose && page.has_next_page() {
        println!(
            "{}",
            dim.apply_to(format!("next: --page {}", page.current_page + 1))
        );
    }
    Ok(())
}

/// Print a detail record: JSON in scripting mode, otherwise labelled rows.
pub fn print_detail<T: Serialize>(
    ctx: &Context,
    title: &str,
    value: &T,
    rows: &[(&str, String)],
) -> Result<()> {
    if ctx.json_output {
        return print_json(value);
    }

    let dim = Style::new().dim();
    println!("{}", style(title).bold());
    println!("{}", dim.apply_to("─".repeat(50)));
    for (label, value) in rows {
        println!("  {:<14} {}", format!("{}:", label), value);
    }
    Ok(())
}

/// Confirm a change that returns no body.
pub fn print_done(ctx: &Context, message: &str) -> Result<()> {
    if ctx.json_output {
        return print_json(&serde_json::json!({ "ok": true, "message": message }));
    }
    let green = Style::new().green();
    println!("{} {}", green.apply_to("✓"), message);
    Ok(())
}

/// Render an optional field for human output.
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_needs_both_ends() {
        assert!(date_range(Some("2024-01-01".into()), None).is_none());
        assert_eq!(
            date_range(Some("2024-01-01".into()), Some("2024-01-31".into())),
            Some(DateRange::new("2024-01-01", "2024-01-31"))
        );
    }

    #[test]
    fn test_page_args_into_pagination() {
        let pagination: Pagination = PageArgs {
            page: Some(3),
            per_page: None,
        }
        .into();
        assert_eq!(pagination.page, Some(3));
        assert_eq!(pagination.per_page, None);
    }

    #[test]
    fn test_context_requires_credentials() {
        let ctx = Context {
            api_key: Some("key".into()),
            api_token: None,
            base_url: None,
            json_output: false,
            verbose: false,
        };
        assert!(ctx.client().is_err());
    }
}
