//! Multi-leg order response types: strategy defaults, place and
//! modify/cancel acknowledgements.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::order::Leg;

// ---------------------------------------------------------------------------
// Strategy Defaults
// ---------------------------------------------------------------------------

/// Query for a prefilled option strategy.
///
/// Used by `GET /trade/v2/orders/multileg/defaults`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StrategyDefaultsQuery<'a> {
    pub account_key: &'a str,
    /// Option root (underlying option series) identifier.
    pub option_root_id: &'a str,
    /// Strategy name, e.g. `"Straddle"` or `"IronCondor"`.
    pub options_strategy_type: &'a str,
}

/// Response from the strategy defaults endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StrategyDefaults {
    /// Prefilled legs of the strategy.
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Place / Modify / Cancel
// ---------------------------------------------------------------------------

/// Per-leg order id returned with a multi-leg acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegOrderRef {
    pub order_id: String,
}

/// Response from `POST /trade/v2/orders/multileg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaceOrderResponse {
    /// Identifier of the placed multi-leg order, used for modify and cancel.
    pub multi_leg_order_id: String,
    #[serde(default)]
    pub orders: Vec<LegOrderRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Acknowledgement from modify (`PATCH`) and cancel (`DELETE`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderAck {
    #[serde(default)]
    pub multi_leg_order_id: Option<String>,
    #[serde(default)]
    pub orders: Vec<LegOrderRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// A response body together with the `X-Request-ID` the gateway echoed back.
#[derive(Debug, Clone)]
pub struct Submission<T> {
    pub body: T,
    /// Value of the `X-Request-ID` response header, when present.
    pub request_id: Option<String>,
}

impl<T> Submission<T> {
    /// Discard the header and keep the body.
    pub fn into_body(self) -> T {
        self.body
    }
}
