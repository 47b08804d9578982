//! Core HTTP client for the Saxo OpenAPI gateway.
//!
//! The [`SaxoClient`] struct is the main entry point for the multi-leg order
//! endpoints. It wraps [`reqwest::Client`] with the bearer token and account
//! key and provides typed `get`, `post`, `patch`, and `delete` methods.
//!
//! API endpoint methods are added to `SaxoClient` via `impl` blocks in the
//! [`crate::api`] module.

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::constants::{REQUEST_ID_HEADER, SIM_BASE_URL};
use crate::error::{ApiErrorBody, Result, SaxoError};
use crate::types::multileg::Submission;

/// Core HTTP client for the Saxo OpenAPI gateway.
///
/// Every request carries `Authorization: Bearer <token>`. The header value is
/// built once, marked sensitive so it never shows up in `Debug` output, and
/// cloned per request.
///
/// # Example
///
/// ```no_run
/// use saxo_multileg::client::SaxoClient;
///
/// # #[tokio::main]
/// # async fn main() -> saxo_multileg::error::Result<()> {
/// let client = SaxoClient::new("your-access-token", "your-account-key")?;
/// let series = client.get_option_space("19").await?;
/// println!("{:?}", series.supported_order_types);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SaxoClient {
    http: reqwest::Client,
    /// Account the orders are placed on.
    account_key: String,
    /// Base URL for REST requests (defaults to [`SIM_BASE_URL`]).
    base_url: String,
    auth_header: HeaderValue,
}

impl SaxoClient {
    /// Create a client for the simulation gateway.
    pub fn new(access_token: impl AsRef<str>, account_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(access_token, account_key, SIM_BASE_URL)
    }

    /// Create a client pointing at a custom base URL (live gateway, proxy or
    /// a local test server).
    pub fn with_base_url(
        access_token: impl AsRef<str>,
        account_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        url::Url::parse(&base_url)?;

        let account_key = account_key.into();
        if account_key.is_empty() {
            return Err(SaxoError::InvalidArgument("account key is empty".into()));
        }

        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .build()?;

        Ok(Self {
            http,
            account_key,
            base_url,
            auth_header: bearer_header(access_token.as_ref())?,
        })
    }

    /// Create a client from loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(
            &config.access_token,
            config.account_key.clone(),
            config.base_url.clone(),
        )
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the account key injected into order bodies and queries.
    pub fn account_key(&self) -> &str {
        &self.account_key
    }

    /// Replace the access token (e.g. after a refresh).
    pub fn set_access_token(&mut self, token: impl AsRef<str>) -> Result<()> {
        self.auth_header = bearer_header(token.as_ref())?;
        Ok(())
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request with query parameters and deserialize the JSON
    /// response.
    pub async fn get<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(&url)
            .headers(self.auth_headers(None)?)
            .query(query)
            .send()
            .await?;

        Ok(self.handle_response(resp).await?.body)
    }

    /// Perform a POST request with a JSON body, optionally tagged with an
    /// `X-Request-ID`, and deserialize the response.
    pub async fn post<B, R>(
        &self,
        path: &str,
        body: &B,
        request_id: Option<&str>,
    ) -> Result<Submission<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, ?request_id, "POST");

        let resp = self
            .http
            .post(&url)
            .headers(self.auth_headers(request_id)?)
            .json(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    /// Perform a PATCH request with a JSON body, optionally tagged with an
    /// `X-Request-ID`, and deserialize the response.
    pub async fn patch<B, R>(
        &self,
        path: &str,
        body: &B,
        request_id: Option<&str>,
    ) -> Result<Submission<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, ?request_id, "PATCH");

        let resp = self
            .http
            .patch(&url)
            .headers(self.auth_headers(request_id)?)
            .json(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    /// Perform a DELETE request with query parameters and deserialize the
    /// JSON response.
    pub async fn delete<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");

        let resp = self
            .http
            .delete(&url)
            .headers(self.auth_headers(None)?)
            .query(query)
            .send()
            .await?;

        Ok(self.handle_response(resp).await?.body)
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Per-request headers: the cached bearer token plus the optional
    /// idempotency id.
    fn auth_headers(&self, request_id: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(header::AUTHORIZATION, self.auth_header.clone());
        if let Some(id) = request_id {
            let value = HeaderValue::from_str(id).map_err(|_| {
                SaxoError::InvalidArgument(format!(
                    "request id {id:?} contains invalid header characters"
                ))
            })?;
            headers.insert(REQUEST_ID_HEADER, value);
        }
        Ok(headers)
    }

    /// Read a response, returning either the deserialized body (with the
    /// echoed request id) or a `SaxoError`.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Submission<R>> {
        let status = resp.status();
        let request_id = resp
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = resp.bytes().await?;

        if status.is_success() {
            let body = serde_json::from_slice(&bytes).map_err(SaxoError::Json)?;
            Ok(Submission { body, request_id })
        } else {
            let body = String::from_utf8_lossy(&bytes);
            Err(parse_error_body(status, &body))
        }
    }
}

/// Build the sensitive `Authorization` header value.
fn bearer_header(token: &str) -> Result<HeaderValue> {
    if token.is_empty() {
        return Err(SaxoError::InvalidArgument("access token is empty".into()));
    }
    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        SaxoError::InvalidArgument("access token contains invalid header characters".into())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Try to parse the gateway's JSON error structure; fall back to a raw HTTP
/// status error.
pub(crate) fn parse_error_body(status: reqwest::StatusCode, body: &str) -> SaxoError {
    if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(body) {
        if api_err.error_code.is_some() || api_err.message.is_some() {
            return SaxoError::Api(api_err);
        }
    }
    SaxoError::HttpStatus {
        status,
        body: body.to_owned(),
    }
}
