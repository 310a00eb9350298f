//! Expenditure payments API.

use crate::client::BoardClient;
use crate::error::Result;
use crate::query::{DateRange, FinancialResponseGroup, Pagination, QueryParams, ToQuery};
use crate::types::{
    ExpenditurePayment, ExpenditureStatus, ListResponse, PaymentLockUpdate, PaymentStatus,
    PaymentStatusUpdate,
};

/// Query parameters for listing expenditure payments.
#[derive(Debug, Clone, Default)]
pub struct ListExpenditurePaymentsQuery {
    pub pagination: Pagination,
    /// Payee invoice date range (`invoice_date_*`).
    pub invoice_date: Option<DateRange>,
    /// Scheduled payment date range (`payment_date_*`).
    pub payment_date: Option<DateRange>,
    /// Statuses of the owning expenditure (`expenditure_expenditure_status_in`).
    pub expenditure_status: Vec<ExpenditureStatus>,
    /// Payment statuses (`payment_status_in`).
    pub payment_status: Vec<PaymentStatus>,
    /// Exact expenditure number (`expenditure_expenditure_no_eq`).
    pub expenditure_no: Option<u64>,
    /// Last-modified range (`updated_at_*`).
    pub updated_at: Option<DateRange>,
    pub response_group: Option<FinancialResponseGroup>,
}

impl ToQuery for ListExpenditurePaymentsQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .pagination(&self.pagination)
            .date_range_opt("invoice_date", self.invoice_date.as_ref())
            .date_range_opt("payment_date", self.payment_date.as_ref())
            .status_in("expenditure_expenditure_status", &self.expenditure_status)
            .status_in("payment_status", &self.payment_status)
            .insert_opt("expenditure_expenditure_no_eq", self.expenditure_no)
            .date_range_opt("updated_at", self.updated_at.as_ref())
            .response_group(self.response_group);
        query
    }
}

/// Expenditure payments API client.
pub struct ExpenditurePaymentsApi {
    client: BoardClient,
}

impl ExpenditurePaymentsApi {
    pub(crate) fn new(client: BoardClient) -> Self {
        Self { client }
    }

    /// List payments with server defaults.
    pub async fn list(&self) -> Result<ListResponse<ExpenditurePayment>> {
        self.list_with_query(ListExpenditurePaymentsQuery::default())
            .await
    }

    /// List payments with query parameters.
    pub async fn list_with_query(
        &self,
        query: ListExpenditurePaymentsQuery,
    ) -> Result<ListResponse<ExpenditurePayment>> {
        self.fetch(query.to_query()).await
    }

    /// List payments of one expenditure.
    pub async fn list_by_expenditure(
        &self,
        expenditure_id: u64,
        query: ListExpenditurePaymentsQuery,
    ) -> Result<ListResponse<ExpenditurePayment>> {
        self.fetch(query.to_query().with("expenditure_id", expenditure_id))
            .await
    }

    /// List payments whose payee invoice date falls in `[start, end]`.
    pub async fn list_by_invoice_date_range(
        &self,
        start: &str,
        end: &str,
        query: ListExpenditurePaymentsQuery,
    ) -> Result<ListResponse<ExpenditurePayment>> {
        let mut params = query.to_query();
        params.date_range("invoice_date", &DateRange::new(start, end));
        self.fetch(params).await
    }

    /// List payments scheduled in `[start, end]`.
    pub async fn list_by_payment_date_range(
        &self,
        start: &str,
        end: &str,
        query: ListExpenditurePaymentsQuery,
    ) -> Result<ListResponse<ExpenditurePayment>> {
        let mut params = query.to_query();
        params.date_range("payment_date", &DateRange::new(start, end));
        self.fetch(params).await
    }

    /// List payments in any of the given payment statuses.
    ///
    /// `statuses` replaces any status set on `query`; an empty slice is sent
    /// as an empty filter value.
    pub async fn list_by_payment_status(
        &self,
        statuses: &[PaymentStatus],
        query: ListExpenditurePaymentsQuery,
    ) -> Result<ListResponse<ExpenditurePayment>> {
        let mut params = query.to_query();
        params.set_status_in("payment_status", statuses);
        self.fetch(params).await
    }

    /// List payments whose expenditure is in any of the given statuses.
    ///
    /// `statuses` replaces any status set on `query`; an empty slice is sent
    /// as an empty filter value.
    pub async fn list_by_expenditure_status(
        &self,
        statuses: &[ExpenditureStatus],
        query: ListExpenditurePaymentsQuery,
    ) -> Result<ListResponse<ExpenditurePayment>> {
        let mut params = query.to_query();
        params.set_status_in("expenditure_expenditure_status", statuses);
        self.fetch(params).await
    }

    /// List payments still waiting for the payee's invoice.
    pub async fn list_invoice_not_received(
        &self,
        query: ListExpenditurePaymentsQuery,
    ) -> Result<ListResponse<ExpenditurePayment>> {
        self.list_by_payment_status(&[PaymentStatus::InvoiceNotReceived], query)
            .await
    }

    /// List payments whose invoice has arrived.
    pub async fn list_invoice_received(
        &self,
        query: ListExpenditurePaymentsQuery,
    ) -> Result<ListResponse<ExpenditurePayment>> {
        self.list_by_payment_status(&[PaymentStatus::InvoiceReceived], query)
            .await
    }

    /// List settled payments.
    pub async fn list_paid(
        &self,
        query: ListExpenditurePaymentsQuery,
    ) -> Result<ListResponse<ExpenditurePayment>> {
        self.list_by_payment_status(&[PaymentStatus::Paid], query)
            .await
    }

    /// List payments with a bank transfer already booked.
    pub async fn list_transfer_reserved(
        &self,
        query: ListExpenditurePaymentsQuery,
    ) -> Result<ListResponse<ExpenditurePayment>> {
        self.list_by_payment_status(&[PaymentStatus::TransferReserved], query)
            .await
    }

    /// Change the payment status. The server answers with no content.
    pub async fn update_payment_status(&self, id: u64, status: PaymentStatus) -> Result<()> {
        self.client
            .patch_empty(
                &format!("/expenditure_payments/payment_status/{}", id),
                &PaymentStatusUpdate {
                    payment_status: status,
                },
            )
            .await
    }

    /// Lock or unlock a payment. The server answers with no content.
    pub async fn update_lock(&self, id: u64, locked: bool) -> Result<()> {
        self.client
            .patch_empty(
                &format!("/expenditure_payments/lock_flg/{}", id),
                &PaymentLockUpdate::new(locked),
            )
            .await
    }

    /// Lock a payment against further edits.
    pub async fn lock(&self, id: u64) -> Result<()> {
        self.update_lock(id, true).await
    }

    /// Unlock a payment.
    pub async fn unlock(&self, id: u64) -> Result<()> {
        self.update_lock(id, false).await
    }

    async fn fetch(&self, query: QueryParams) -> Result<ListResponse<ExpenditurePayment>> {
        self.client.get("/expenditure_payments", query).await
    }
}
