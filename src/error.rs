//! Error types for the `saxo-multileg` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, SaxoError>`.
//!
//! [`SaxoError`] covers:
//! - **API errors**: Structured error responses from the OpenAPI gateway
//! - **HTTP status errors**: Unexpected status codes with response body
//! - **HTTP transport errors**: Network, TLS, timeout failures
//! - **JSON errors**: Malformed order text or response bodies
//! - **I/O errors**: Order files that cannot be read or written
//! - **Shaping errors**: Unsupported order types/durations, malformed orders
//! - **Session errors**: Modify/cancel without a placed order
//! - **Configuration errors**: Missing credentials

use std::fmt;

/// Error body returned by the OpenAPI gateway.
///
/// The same shape is used for the `ErrorInfo` object embedded in otherwise
/// successful precheck responses.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorBody {
    /// Machine readable error code (e.g. `"InsufficientMargin"`).
    #[serde(default)]
    pub error_code: Option<String>,
    /// Human-readable description of the error.
    #[serde(default)]
    pub message: Option<String>,
    /// Per-field validation messages, when the request failed model binding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_state: Option<serde_json::Value>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.error_code.as_deref().unwrap_or("Unknown"),
            self.message.as_deref().unwrap_or("No message"),
        )?;
        if let Some(state) = &self.model_state {
            write!(f, " {state}")?;
        }
        Ok(())
    }
}

/// All possible errors produced by the `saxo-multileg` client.
#[derive(Debug, thiserror::Error)]
pub enum SaxoError {
    /// An error response returned by the OpenAPI gateway.
    #[error("API error: {0}")]
    Api(ApiErrorBody),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse or produce JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing an order file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The order type is not one of the supported values.
    #[error("Unsupported order type {0:?}")]
    UnsupportedOrderType(String),

    /// The order duration is not one of the supported values.
    #[error("Unsupported order duration {0:?}")]
    UnsupportedDuration(String),

    /// The order JSON is syntactically valid but lacks the expected shape.
    #[error("Malformed order: {0}")]
    MalformedOrder(String),

    /// Modify or cancel was requested before any order was placed.
    #[error("No order has been placed in this session")]
    NoLastOrder,

    /// Required configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SaxoError>;
