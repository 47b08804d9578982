//! Constants for the Saxo OpenAPI multi-leg order endpoints.
//!
//! Contains base URLs, endpoint paths, header names and the placeholder
//! values used when shaping orders without live quote access.

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the simulation (SIM) OpenAPI gateway.
pub const SIM_BASE_URL: &str = "https://gateway.saxobank.com/sim/openapi";

/// Base URL for the live OpenAPI gateway.
pub const LIVE_BASE_URL: &str = "https://gateway.saxobank.com/openapi";

// ---------------------------------------------------------------------------
// Endpoint paths
// ---------------------------------------------------------------------------

/// Multi-leg order endpoint (place via POST, modify via PATCH).
pub const MULTILEG_ORDERS_PATH: &str = "/trade/v2/orders/multileg";

/// Prefilled option strategy endpoint.
pub const MULTILEG_DEFAULTS_PATH: &str = "/trade/v2/orders/multileg/defaults";

/// Multi-leg precheck endpoint.
pub const MULTILEG_PRECHECK_PATH: &str = "/trade/v2/orders/multileg/precheck";

/// Contract option space (option series) endpoint; the option root id is
/// appended as a path segment.
pub const OPTION_SPACE_PATH: &str = "/ref/v1/instruments/contractoptionspaces";

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// Idempotency header (`X-Request-ID`, lowercase as `http` stores it). The
/// gateway rejects identical requests carrying the same value within
/// [`REQUEST_DEDUP_WINDOW_SECS`] with `409 Conflict`.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Window in which the gateway deduplicates identical requests.
pub const REQUEST_DEDUP_WINDOW_SECS: u32 = 15;

// ---------------------------------------------------------------------------
// Precheck
// ---------------------------------------------------------------------------

/// `PreCheckResult` value for an order that passed validation.
pub const PRECHECK_OK: &str = "Ok";

/// Field groups requested on every precheck.
pub const PRECHECK_FIELD_GROUPS: [&str; 2] = ["Costs", "MarginImpactBuySell"];

// ---------------------------------------------------------------------------
// Shaping defaults
// ---------------------------------------------------------------------------

/// Placeholder price used when no quote is available. The SIM environment
/// does not allow price lookups for most option instruments.
pub const DEFAULT_REFERENCE_PRICE: f64 = 70.0;

/// Distance added to the order price to form a `StopLimitPrice`.
pub const STOP_LIMIT_OFFSET: f64 = 1.0;

/// Default `TrailingstopDistanceToMarket` for trailing stop orders.
pub const DEFAULT_TRAILING_DISTANCE: f64 = 1.0;

/// Default `TrailingStopStep` for trailing stop orders.
pub const DEFAULT_TRAILING_STEP: f64 = 0.1;

/// Days ahead of now used for a `GoodTillDate` expiration.
pub const DEFAULT_GOOD_TILL_DATE_DAYS: i64 = 3;
