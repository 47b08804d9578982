#![allow(missing_docs)]
//! Contract option space (option series) types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::enums::OrderType;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Query parameters for the option space endpoint.
///
/// Used by `GET /ref/v1/instruments/contractoptionspaces/{option-root-id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionSpaceQuery {
    /// Which expiries to include (`"AllDates"`, `"DefaultDates"`, ...).
    pub option_space_segment: String,
    /// Instrument trading status filter.
    pub trading_status: String,
}

impl Default for OptionSpaceQuery {
    fn default() -> Self {
        Self {
            option_space_segment: "AllDates".into(),
            trading_status: "Tradable".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// One option contract (strike and side) in an expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StrikeEntry {
    #[serde(default)]
    pub strike_price: Option<f64>,
    /// `"Call"` or `"Put"`.
    #[serde(default)]
    pub put_call: Option<String>,
    /// Instrument id of this option contract, used as a leg `Uic`.
    #[serde(default)]
    pub uic: Option<u64>,
    #[serde(default)]
    pub trading_status: Option<String>,
}

/// One expiry of the option series.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpiryEntry {
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub display_expiry: Option<String>,
    #[serde(default)]
    pub last_trade_date: Option<String>,
    #[serde(default)]
    pub specific_options: Vec<StrikeEntry>,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Response from the option space endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionSpace {
    /// Order types the gateway accepts for this option root, as raw strings.
    #[serde(default)]
    pub supported_order_types: Vec<String>,
    #[serde(default)]
    pub contract_size: Option<f64>,
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub tick_size_scheme: Option<Value>,
    #[serde(default)]
    pub option_space: Vec<ExpiryEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OptionSpace {
    /// The supported order types this crate knows how to shape, in the
    /// order the gateway listed them.
    pub fn known_order_types(&self) -> Vec<OrderType> {
        self.supported_order_types
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect()
    }
}
