//! Invoices API.

use crate::client::BoardClient;
use crate::error::Result;
use crate::query::{DateRange, FinancialResponseGroup, Pagination, QueryParams, ToQuery};
use crate::types::{Invoice, InvoiceStatus, InvoiceStatusUpdate, ListResponse, OrderStatus};

/// Query parameters for listing invoices.
#[derive(Debug, Clone, Default)]
pub struct ListInvoicesQuery {
    pub pagination: Pagination,
    /// Invoice date range (`invoice_date_gteq` / `invoice_date_lteq`).
    pub invoice_date: Option<DateRange>,
    /// Payment deadline range (`invoice_payment_limit_date_*`).
    pub payment_limit_date: Option<DateRange>,
    /// Order statuses of the owning project (`project_order_status_in`).
    pub order_status: Vec<OrderStatus>,
    /// Invoice statuses (`invoice_status_in`).
    pub invoice_status: Vec<InvoiceStatus>,
    /// Exact project number (`project_project_no_eq`).
    pub project_no: Option<u64>,
    /// Last-modified range (`updated_at_*`).
    pub updated_at: Option<DateRange>,
    pub response_group: Option<FinancialResponseGroup>,
}

impl ToQuery for ListInvoicesQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .pagination(&self.pagination)
            .date_range_opt("invoice_date", self.invoice_date.as_ref())
            .date_range_opt("invoice_payment_limit_date", self.payment_limit_date.as_ref())
            .status_in("project_order_status", &self.order_status)
            .status_in("invoice_status", &self.invoice_status)
            .insert_opt("project_project_no_eq", self.project_no)
            .date_range_opt("updated_at", self.updated_at.as_ref())
            .response_group(self.response_group);
        query
    }
}

/// Invoices API client.
pub struct InvoicesApi {
    client: BoardClient,
}

impl InvoicesApi {
    pub(crate) fn new(client: BoardClient) -> Self {
        Self { client }
    }

    /// List invoices with server defaults.
    pub async fn list(&self) -> Result<ListResponse<Invoice>> {
        self.list_with_query(ListInvoicesQuery::default()).await
    }

    /// List invoices with query parameters.
    pub async fn list_with_query(&self, query: ListInvoicesQuery) -> Result<ListResponse<Invoice>> {
        self.fetch(query.to_query()).await
    }

    /// List invoices of one project.
    pub async fn list_by_project(
        &self,
        project_id: u64,
        query: ListInvoicesQuery,
    ) -> Result<ListResponse<Invoice>> {
        self.fetch(query.to_query().with("project_id", project_id))
            .await
    }

    /// List invoices whose invoice date falls in `[start, end]` (`YYYY-MM-DD`).
    pub async fn list_by_invoice_date_range(
        &self,
        start: &str,
        end: &str,
        query: ListInvoicesQuery,
    ) -> Result<ListResponse<Invoice>> {
        let mut params = query.to_query();
        params.date_range("invoice_date", &DateRange::new(start, end));
        self.fetch(params).await
    }

    /// List invoices whose payment deadline falls in `[start, end]` (`YYYY-MM-DD`).
    pub async fn list_by_payment_limit_date_range(
        &self,
        start: &str,
        end: &str,
        query: ListInvoicesQuery,
    ) -> Result<ListResponse<Invoice>> {
        let mut params = query.to_query();
        params.date_range("invoice_payment_limit_date", &DateRange::new(start, end));
        self.fetch(params).await
    }

    /// List invoices in any of the given invoice statuses.
    ///
    /// `statuses` replaces any status set on `query`; an empty slice is sent
    /// as an empty filter value.
    pub async fn list_by_status(
        &self,
        statuses: &[InvoiceStatus],
        query: ListInvoicesQuery,
    ) -> Result<ListResponse<Invoice>> {
        let mut params = query.to_query();
        params.set_status_in("invoice_status", statuses);
        self.fetch(params).await
    }

    /// List invoices whose project is in any of the given order statuses.
    ///
    /// `statuses` replaces any status set on `query`; an empty slice is sent
    /// as an empty filter value.
    pub async fn list_by_order_status(
        &self,
        statuses: &[OrderStatus],
        query: ListInvoicesQuery,
    ) -> Result<ListResponse<Invoice>> {
        let mut params = query.to_query();
        params.set_status_in("project_order_status", statuses);
        self.fetch(params).await
    }

    /// List invoices not yet billed.
    pub async fn list_unpaid(&self, query: ListInvoicesQuery) -> Result<ListResponse<Invoice>> {
        self.list_by_status(&[InvoiceStatus::Unpaid], query).await
    }

    /// List billed invoices.
    pub async fn list_billed(&self, query: ListInvoicesQuery) -> Result<ListResponse<Invoice>> {
        self.list_by_status(&[InvoiceStatus::Billed], query).await
    }

    /// List invoices that have been paid.
    pub async fn list_paid(&self, query: ListInvoicesQuery) -> Result<ListResponse<Invoice>> {
        self.list_by_status(&[InvoiceStatus::Paid], query).await
    }

    /// Change the invoice status. The server answers with no content.
    pub async fn update_status(&self, id: u64, status: InvoiceStatus) -> Result<()> {
        self.client
            .patch_empty(
                &format!("/invoices/invoice_status/{}", id),
                &InvoiceStatusUpdate {
                    invoice_status: status,
                },
            )
            .await
    }

    async fn fetch(&self, query: QueryParams) -> Result<ListResponse<Invoice>> {
        self.client.get("/invoices", query).await
    }
}
