//! Query parameter encoding.
//!
//! Filters are built as structured values (pagination, date ranges, status
//! sets, detail levels) and flattened here into the single-level key/value
//! mapping the Board API reads from the query string. Nothing in this module
//! touches the network or validates values; a malformed date is passed
//! through and rejected (or not) by the server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::CodedStatus;

/// A primitive query value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{}", n),
            QueryValue::UInt(n) => write!(f, "{}", n),
            QueryValue::Float(n) => write!(f, "{}", n),
            QueryValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Text(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        QueryValue::UInt(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::UInt(value.into())
    }
}

/// Flat, insertion-ordered query mapping. Each key appears at most once.
///
/// Inserting an existing key replaces its value in place, so a later write
/// always wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Set `key`, replacing any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Set `key` only when a value is present.
    pub fn insert_opt<V: Into<QueryValue>>(
        &mut self,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Consuming variant of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add `page` / `per_page`.
    pub fn pagination(&mut self, pagination: &Pagination) -> &mut Self {
        self.insert_opt("page", pagination.page)
            .insert_opt("per_page", pagination.per_page)
    }

    /// Add `response_group` when a detail level was chosen.
    pub fn response_group<G: DetailLevel>(&mut self, group: Option<G>) -> &mut Self {
        self.insert_opt("response_group", group.map(|g| g.as_str()))
    }

    /// Add `<field>_gteq` and `<field>_lteq`.
    pub fn date_range(&mut self, field: &str, range: &DateRange) -> &mut Self {
        self.insert(format!("{}_gteq", field), range.start.as_str())
            .insert(format!("{}_lteq", field), range.end.as_str())
    }

    /// Add `<field>_gteq` and `<field>_lteq` when a range was given.
    pub fn date_range_opt(&mut self, field: &str, range: Option<&DateRange>) -> &mut Self {
        if let Some(range) = range {
            self.date_range(field, range);
        }
        self
    }

    /// Add `<field>_in` with the status codes joined by `,` in the given order.
    ///
    /// An empty set adds nothing.
    pub fn status_in<S: CodedStatus>(&mut self, field: &str, statuses: &[S]) -> &mut Self {
        if statuses.is_empty() {
            return self;
        }
        self.set_status_in(field, statuses)
    }

    /// Set `<field>_in` unconditionally, replacing any earlier set.
    ///
    /// An empty set is sent as an empty value.
    pub fn set_status_in<S: CodedStatus>(&mut self, field: &str, statuses: &[S]) -> &mut Self {
        let joined = statuses
            .iter()
            .map(|s| s.code().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.insert(format!("{}_in", field), joined)
    }

    /// Iterate over key/value pairs with values rendered as text.
    pub fn iter(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.to_string()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Conversion of a filter record into query parameters.
pub trait ToQuery {
    fn to_query(&self) -> QueryParams;
}

impl ToQuery for QueryParams {
    fn to_query(&self) -> QueryParams {
        self.clone()
    }
}

/// Page selection for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

/// Inclusive date range, `YYYY-MM-DD` on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A `response_group` value.
pub trait DetailLevel: Copy {
    fn as_str(self) -> &'static str;
}

/// Detail level for clients, client branches and projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseGroup {
    Small,
    Medium,
    Large,
}

impl DetailLevel for ResponseGroup {
    fn as_str(self) -> &'static str {
        match self {
            ResponseGroup::Small => "small",
            ResponseGroup::Medium => "medium",
            ResponseGroup::Large => "large",
        }
    }
}

impl fmt::Display for ResponseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(ResponseGroup::Small),
            "medium" => Ok(ResponseGroup::Medium),
            "large" => Ok(ResponseGroup::Large),
            other => Err(format!("unknown response group: {}", other)),
        }
    }
}

/// Detail level for invoices and expenditure payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinancialResponseGroup {
    Small,
    Medium,
    Large,
    /// Include the invoice document with its detail lines.
    Invoice,
    All,
}

impl DetailLevel for FinancialResponseGroup {
    fn as_str(self) -> &'static str {
        match self {
            FinancialResponseGroup::Small => "small",
            FinancialResponseGroup::Medium => "medium",
            FinancialResponseGroup::Large => "large",
            FinancialResponseGroup::Invoice => "invoice",
            FinancialResponseGroup::All => "all",
        }
    }
}

impl fmt::Display for FinancialResponseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinancialResponseGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(FinancialResponseGroup::Small),
            "medium" => Ok(FinancialResponseGroup::Medium),
            "large" => Ok(FinancialResponseGroup::Large),
            "invoice" => Ok(FinancialResponseGroup::Invoice),
            "all" => Ok(FinancialResponseGroup::All),
            other => Err(format!("unknown response group: {}", other)),
        }
    }
}
