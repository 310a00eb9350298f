//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::{ClientBranchesApi, ClientsApi, ExpenditurePaymentsApi, InvoicesApi, ProjectsApi};
use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::{Error, Result};
use crate::query::QueryParams;
use crate::request::{Method, Request};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Board API client.
///
/// Cheap to clone; clones share one connection pool and one set of
/// credentials. Every resource accessor hands out a facade over the same
/// dispatcher.
///
/// # Example
///
/// ```no_run
/// use board_client::BoardClient;
///
/// # async fn example() -> board_client::Result<()> {
/// let client = BoardClient::builder()
///     .api_key("key")
///     .api_token("token")
///     .build()?;
///
/// let projects = client.projects().list().await?;
/// println!("{} projects", projects.total);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BoardClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client with auth headers installed.
    http: reqwest::Client,
    /// Base URL, always ending in `/`.
    base_url: Url,
    /// Optional per-request timeout.
    timeout: Option<Duration>,
}

impl BoardClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client from a configuration value.
    pub fn new(config: Config) -> Result<Self> {
        ClientBuilder::from_config(config).build()
    }

    /// Create a client from `BOARD_API_KEY`, `BOARD_API_TOKEN` and `BOARD_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the clients API.
    pub fn clients(&self) -> ClientsApi {
        ClientsApi::new(self.clone())
    }

    /// Access the client branches API.
    pub fn client_branches(&self) -> ClientBranchesApi {
        ClientBranchesApi::new(self.clone())
    }

    /// Access the projects API.
    pub fn projects(&self) -> ProjectsApi {
        ProjectsApi::new(self.clone())
    }

    /// Access the invoices API.
    pub fn invoices(&self) -> InvoicesApi {
        InvoicesApi::new(self.clone())
    }

    /// Access the expenditure payments API.
    pub fn expenditure_payments(&self) -> ExpenditurePaymentsApi {
        ExpenditurePaymentsApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Build the full URL for a resource path and query.
    ///
    /// No `?` is appended when the query is empty.
    pub fn url(&self, path: &str, query: &QueryParams) -> Result<Url> {
        if path.contains(['?', '#']) {
            return Err(Error::InvalidPath(path.to_string()));
        }
        let mut url = self.inner.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }

    /// Send a request and parse the JSON response body as `T`.
    ///
    /// The body is parsed from raw bytes; invalid UTF-8 fails as [`Error::Decode`].
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.send(request).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(Error::Decode)
    }

    /// Send a request whose response carries no content. The body is not read.
    pub async fn execute_empty(&self, request: Request) -> Result<()> {
        self.send(request).await?;
        Ok(())
    }

    /// Issue exactly one HTTP call and turn a non-success status into [`Error::Api`].
    async fn send(&self, request: Request) -> Result<reqwest::Response> {
        let Request {
            method,
            path,
            query,
            body,
        } = request;

        let url = self.url(&path, &query)?;
        tracing::debug!(method = %method, url = %url, "dispatching request");

        let mut builder = self.inner.http.request(method.into(), url);
        if let Some(timeout) = self.inner.timeout {
            builder = builder.timeout(timeout);
        }
        if method != Method::Get
            && let Some(body) = &body
        {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!(method = %method, path = %path, status = status.as_u16(), "response received");

        if status.is_success() {
            return Ok(response);
        }

        let status_text = reason_phrase(&response);
        let body = response.text().await?;
        tracing::debug!(method = %method, path = %path, status = status.as_u16(), "request failed");
        Err(Error::Api {
            status: status.as_u16(),
            status_text,
            body,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verb helpers used by the resource facades
    // ─────────────────────────────────────────────────────────────────────────

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> Result<T> {
        self.execute(Request::get(path).query(query)).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Request::post(path).json(body)?).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Request::patch(path).json(body)?).await
    }

    /// Make a PATCH request that returns no content.
    pub(crate) async fn patch_empty<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute_empty(Request::patch(path).json(body)?).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute_empty(Request::delete(path)).await
    }
}

/// Reason phrase as sent by the server.
///
/// hyper only records the phrase when it differs from the canonical one, so
/// the canonical reason fills in otherwise. Unregistered codes with no phrase
/// on the wire yield an empty string.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

impl fmt::Debug for BoardClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Builder for creating a [`BoardClient`].
pub struct ClientBuilder {
    api_key: Option<String>,
    api_token: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            api_key: None,
            api_token: None,
            base_url: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: Config) -> Self {
        Self::new()
            .api_key(config.api_key)
            .api_token(config.api_token)
            .base_url(config.base_url)
    }

    /// Set the API key sent as `x-api-key`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API token sent as a bearer token.
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the base URL. Defaults to the production API root.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a per-request timeout. None by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BoardClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::Config("api_key is required".to_string()))?;
        let api_token = self
            .api_token
            .ok_or_else(|| Error::Config("api_token is required".to_string()))?;

        // Parse and normalize base URL so joins append to its path
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut base_url = Url::parse(&base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("base_url cannot be a base: {}", base_url)));
        }
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Build default headers
        let mut headers = HeaderMap::new();

        let mut key = HeaderValue::from_str(&api_key)
            .map_err(|_| Error::Config("Invalid API key".to_string()))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_token))
            .map_err(|_| Error::Config("Invalid API token".to_string()))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        // Build HTTP client
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("board-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(BoardClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
