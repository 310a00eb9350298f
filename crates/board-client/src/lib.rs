//! HTTP client SDK for the Board business-management API.
//!
//! This crate provides a typed client for clients, client branches,
//! projects, invoices and expenditure payments.
//!
//! # Example
//!
//! ```no_run
//! use board_client::{BoardClient, InvoiceStatus, ListInvoicesQuery, Result};
//!
//! # async fn example() -> Result<()> {
//! // Reads BOARD_API_KEY / BOARD_API_TOKEN (and optionally BOARD_BASE_URL)
//! let client = BoardClient::from_env()?;
//!
//! // Fetch a client with its contact details
//! let customer = client
//!     .clients()
//!     .get(42, Some(board_client::ResponseGroup::Medium))
//!     .await?;
//! println!("{}: {}", customer.id, customer.name);
//!
//! // Invoices that are billed or already paid
//! let invoices = client
//!     .invoices()
//!     .list_by_status(&[InvoiceStatus::Billed, InvoiceStatus::Paid], ListInvoicesQuery::default())
//!     .await?;
//! println!("{} invoices", invoices.total);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Clients**: list, get, create, update, delete, archive
//! - **Client branches**: list (all or per client), get, create, update, delete, archive
//! - **Projects**: list (all, per client, per branch), get, create, update, delete
//! - **Invoices**: list with date/status filters, status changes
//! - **Expenditure payments**: list with date/status filters, status and lock changes
//!
//! Anything else can be reached through [`BoardClient::execute`] with a
//! hand-built [`Request`].
//!
//! # Errors
//!
//! Calls fail with [`Error::Transport`] when no response arrived,
//! [`Error::Api`] for non-success statuses (status, reason and raw body
//! preserved), and [`Error::Decode`] when a success body is not the expected
//! JSON. Nothing is retried.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod request;
pub mod types;

pub use client::{BoardClient, ClientBuilder};
pub use config::Config;
pub use error::{Error, Result};
pub use query::{
    DateRange, DetailLevel, FinancialResponseGroup, Pagination, QueryParams, QueryValue,
    ResponseGroup, ToQuery,
};
pub use request::{Method, Request};
pub use types::*;

// Re-export API types that are commonly used with query methods
pub use api::{
    ListClientBranchesQuery, ListClientsQuery, ListExpenditurePaymentsQuery, ListInvoicesQuery,
    ListProjectsQuery,
};
