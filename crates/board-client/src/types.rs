//! Request and response types for the Board API.
//!
//! These types mirror the server's API contract. Fields marked optional on
//! entities are only populated at the `medium` detail level and above.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─────────────────────────────────────────────────────────────────────────────
// Envelope
// ─────────────────────────────────────────────────────────────────────────────

/// Paginated collection returned by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total number of matching items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub current_page: u32,
    /// Page size.
    pub per_page: u32,
    /// Last page number.
    pub last_page: u32,
}

impl<T> ListResponse<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a later page exists. Fetching it is up to the caller.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.last_page
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Status codes
// ─────────────────────────────────────────────────────────────────────────────

/// A closed, integer-coded status vocabulary.
pub trait CodedStatus: Copy {
    /// Wire code for this status.
    fn code(self) -> u8;
}

macro_rules! coded_status {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $key:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every status, in code order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Snake-case name of the status.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl CodedStatus for $name {
            fn code(self) -> u8 {
                match self {
                    $($name::$variant => $code,)+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = u8;

            fn try_from(code: u8) -> std::result::Result<Self, u8> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err(other),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        /// Accepts either the snake-case name or the numeric code.
        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                if let Ok(code) = s.parse::<u8>() {
                    return $name::try_from(code)
                        .map_err(|c| format!("unknown {} code: {}", stringify!($name), c));
                }
                $name::ALL
                    .iter()
                    .copied()
                    .find(|status| status.as_str() == s)
                    .ok_or_else(|| format!("unknown {}: {}", stringify!($name), s))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let code = u8::deserialize(deserializer)?;
                $name::try_from(code).map_err(|c| {
                    serde::de::Error::custom(format!("unknown {} code: {}", stringify!($name), c))
                })
            }
        }
    };
}

coded_status! {
    /// Billing state of an invoice.
    pub enum InvoiceStatus {
        Unpaid = 1 => "unpaid",
        Billed = 2 => "billed",
        Paid = 3 => "paid",
        BillOk = 4 => "bill_ok",
        PartiallyPaid = 5 => "partially_paid",
        Uncollectible = 9 => "uncollectible",
    }
}

coded_status! {
    /// Sales-side order state of a project.
    pub enum OrderStatus {
        /// Estimate, high probability.
        EstimateHigh = 1 => "estimate_high",
        EstimateMedium = 2 => "estimate_medium",
        EstimateLow = 3 => "estimate_low",
        OrderConfirmed = 4 => "order_confirmed",
        Ordered = 5 => "ordered",
        /// Estimate, excluded from forecasts.
        EstimateExcluded = 8 => "estimate_excluded",
        Lost = 9 => "lost",
    }
}

coded_status! {
    /// Purchase-side order state of an expenditure.
    pub enum ExpenditureStatus {
        EstimateHigh = 1 => "estimate_high",
        EstimateMedium = 2 => "estimate_medium",
        EstimateLow = 3 => "estimate_low",
        OrderConfirmed = 4 => "order_confirmed",
        Ordered = 5 => "ordered",
        EstimateExcluded = 8 => "estimate_excluded",
        Canceled = 9 => "canceled",
    }
}

coded_status! {
    /// Settlement state of an expenditure payment.
    pub enum PaymentStatus {
        InvoiceNotReceived = 1 => "invoice_not_received",
        InvoiceReceived = 2 => "invoice_received",
        Paid = 3 => "paid",
        TransferReserved = 4 => "transfer_reserved",
    }
}

coded_status! {
    /// How an expenditure payment is settled.
    pub enum PaymentMethod {
        BankTransfer = 1 => "bank_transfer",
        AccountTransfer = 2 => "account_transfer",
        CreditCard = 3 => "credit_card",
        Cash = 4 => "cash",
        CashOnDelivery = 5 => "cash_on_delivery",
        ConvenienceStore = 6 => "convenience_store",
        PostalTransfer = 7 => "postal_transfer",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clients
// ─────────────────────────────────────────────────────────────────────────────

/// A customer company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: u64,
    pub name: String,
    pub name_kana: String,
    pub code: String,
    pub short_name: String,
    pub archive_flg: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Request to create a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub name_kana: String,
    pub short_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Partial update of a client. Unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_kana: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_flg: Option<bool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Client branches
// ─────────────────────────────────────────────────────────────────────────────

/// A branch office of a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientBranch {
    pub id: u64,
    pub client_id: u64,
    pub name: String,
    pub code: String,
    pub archive_flg: bool,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Request to create a client branch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateClientBranchRequest {
    pub client_id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Partial update of a client branch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClientBranchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_flg: Option<bool>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────────────────────────────────────

/// A sales project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_branch_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_branch_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to create a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub status: String,
    pub client_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_branch_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_branch_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared nested summaries
// ─────────────────────────────────────────────────────────────────────────────

/// Counterparty (client or payee) summary embedded in financial records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartySummary {
    pub id: u64,
    pub name: String,
    pub name_disp: String,
    pub custom_no: String,
}

/// Person summary (contact or staff user).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: u64,
    pub last_name: String,
    pub first_name: String,
}

/// Branch summary (client, payee or company branch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchSummary {
    pub id: u64,
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Invoices
// ─────────────────────────────────────────────────────────────────────────────

/// A scheduled or issued invoice for a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: u64,
    pub project_id: u64,
    pub project_no: u64,
    pub management_no: String,
    pub name: String,
    pub total: f64,
    pub tax: f64,
    pub cost_total: f64,
    pub cost_tax: f64,
    pub invoice_date: String,
    pub payment_limit_date: String,
    pub order_status: u8,
    pub order_status_name: String,
    pub invoice_status: u8,
    pub invoice_status_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type2_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type2_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type3_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type3_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<String>,
    pub currency: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<PartySummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<PersonSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<PersonSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_branch: Option<BranchSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_branch: Option<BranchSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_jpy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_jpy: Option<f64>,
    /// Invoice document, present at the `invoice` and `all` detail levels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<InvoiceDocument>,
}

impl Invoice {
    /// Typed invoice status, if the code is a known one.
    pub fn status(&self) -> Option<InvoiceStatus> {
        InvoiceStatus::try_from(self.invoice_status).ok()
    }

    /// Typed order status, if the code is a known one.
    pub fn order(&self) -> Option<OrderStatus> {
        OrderStatus::try_from(self.order_status).ok()
    }
}

/// The issued invoice document attached to an [`Invoice`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_withholding: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seal_approval_status: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_amount_disp_kbn: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_flg: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<InvoiceDetail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_limit_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disp_invoice_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank_date_flg: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_bank_info_flg: Option<u8>,
}

/// One line of an invoice document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub no: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_withholding_flg: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_included_flg: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduced_tax_rate_kbn: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_subtotal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_detail_kbn: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_detail_kbn_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deduction_applicable: Option<bool>,
}

/// Body of an invoice status change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InvoiceStatusUpdate {
    pub invoice_status: InvoiceStatus,
}

// ─────────────────────────────────────────────────────────────────────────────
// Expenditure payments
// ─────────────────────────────────────────────────────────────────────────────

/// A scheduled payment against a purchase order (expenditure).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenditurePayment {
    pub id: u64,
    pub expenditure_id: u64,
    pub expenditure_no: u64,
    pub management_no: String,
    pub name: String,
    pub total: f64,
    pub tax: f64,
    pub tax_withholding: f64,
    pub invoice_date: String,
    pub payment_date: String,
    pub expenditure_status: u8,
    pub expenditure_status_name: String,
    pub payment_status: u8,
    pub payment_status_name: String,
    pub payment_method_kbn: u8,
    pub payment_method_kbn_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenditure_type_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenditure_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenditure_type2_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenditure_type2_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenditure_type3_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expenditure_type3_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    pub currency: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<PartySummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_contact: Option<PersonSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<PersonSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_branch: Option<BranchSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_branch: Option<BranchSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_jpy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_jpy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_flg: Option<u8>,
}

impl ExpenditurePayment {
    /// Typed payment status, if the code is a known one.
    pub fn status(&self) -> Option<PaymentStatus> {
        PaymentStatus::try_from(self.payment_status).ok()
    }

    /// Typed expenditure status, if the code is a known one.
    pub fn expenditure(&self) -> Option<ExpenditureStatus> {
        ExpenditureStatus::try_from(self.expenditure_status).ok()
    }

    /// Typed payment method, if the code is a known one.
    pub fn method(&self) -> Option<PaymentMethod> {
        PaymentMethod::try_from(self.payment_method_kbn).ok()
    }

    pub fn is_locked(&self) -> bool {
        self.lock_flg == Some(1)
    }
}

/// Body of a payment status change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaymentStatusUpdate {
    pub payment_status: PaymentStatus,
}

/// Body of a payment lock change. `lock_flg` is `1` when locked, `0` otherwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaymentLockUpdate {
    pub lock_flg: u8,
}

impl PaymentLockUpdate {
    pub fn new(locked: bool) -> Self {
        Self {
            lock_flg: u8::from(locked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_codes() {
        assert_eq!(InvoiceStatus::Uncollectible.code(), 9);
        assert_eq!(OrderStatus::try_from(8u8), Ok(OrderStatus::EstimateExcluded));
        assert_eq!(ExpenditureStatus::try_from(6u8), Err(6));
        assert_eq!(PaymentMethod::ALL.len(), 7);
    }

    #[test]
    fn test_status_serializes_as_integer() {
        let body = serde_json::to_value(PaymentStatusUpdate {
            payment_status: PaymentStatus::TransferReserved,
        })
        .unwrap();
        assert_eq!(body, json!({ "payment_status": 4 }));

        let parsed: InvoiceStatusUpdate =
            serde_json::from_value(json!({ "invoice_status": 2 })).unwrap();
        assert_eq!(parsed.invoice_status, InvoiceStatus::Billed);

        let bad = serde_json::from_value::<InvoiceStatusUpdate>(json!({ "invoice_status": 7 }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("paid".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Paid));
        assert_eq!("5".parse::<OrderStatus>(), Ok(OrderStatus::Ordered));
        assert!("7".parse::<InvoiceStatus>().is_err());
        assert!("nope".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_lock_update_body() {
        assert_eq!(
            serde_json::to_value(PaymentLockUpdate::new(true)).unwrap(),
            json!({ "lock_flg": 1 })
        );
        assert_eq!(PaymentLockUpdate::new(false).lock_flg, 0);
    }

    #[test]
    fn test_partial_update_omits_unset_fields() {
        let body = serde_json::to_value(UpdateClientRequest {
            archive_flg: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, json!({ "archive_flg": true }));
    }

    #[test]
    fn test_list_response_paging() {
        let page: ListResponse<Client> = serde_json::from_value(json!({
            "items": [],
            "total": 40,
            "current_page": 1,
            "per_page": 20,
            "last_page": 2
        }))
        .unwrap();
        assert!(page.is_empty());
        assert!(page.has_next_page());
    }

    #[test]
    fn test_small_client_payload() {
        let client: Client = serde_json::from_value(json!({
            "id": 42,
            "name": "Example Inc.",
            "name_kana": "エグザンプル",
            "code": "C-042",
            "short_name": "Example",
            "archive_flg": false,
            "created_at": "2024-01-01T00:00:00+09:00",
            "updated_at": "2024-01-02T00:00:00+09:00"
        }))
        .unwrap();
        assert_eq!(client.id, 42);
        assert!(client.memo.is_none());
    }
}
