//! API endpoint implementations.

mod client_branches;
mod clients;
mod expenditure_payments;
mod invoices;
mod projects;

pub use client_branches::{ClientBranchesApi, ListClientBranchesQuery};
pub use clients::{ClientsApi, ListClientsQuery};
pub use expenditure_payments::{ExpenditurePaymentsApi, ListExpenditurePaymentsQuery};
pub use invoices::{InvoicesApi, ListInvoicesQuery};
pub use projects::{ListProjectsQuery, ProjectsApi};
