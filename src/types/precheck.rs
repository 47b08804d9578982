//! Precheck (order dry-run) response types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::constants::PRECHECK_OK;
use crate::error::ApiErrorBody;

/// Response from `POST /trade/v2/orders/multileg/precheck`.
///
/// Cost and margin figures vary by instrument and requested field groups, so
/// everything beyond the result and error info is kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrecheckResponse {
    /// `"Ok"` when the order passed the gateway's rules. Empty when the
    /// gateway left it out.
    #[serde(default)]
    pub pre_check_result: String,
    /// Functional error attached to an otherwise valid order (e.g. the account
    /// lacks margin). Cost and margin values are still populated.
    ///
    /// `Some` whenever the key is present, including `"ErrorInfo": null`.
    #[serde(default, deserialize_with = "present_error_info")]
    pub error_info: Option<ApiErrorBody>,
    #[serde(default)]
    pub estimated_cash_required: Option<f64>,
    #[serde(default)]
    pub estimated_cash_required_currency: Option<String>,
    #[serde(default)]
    pub margin_impact_buy_sell: Option<Value>,
    #[serde(default)]
    pub pre_trade_disclaimers: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Only called when the key exists, so a `null` still counts as an error.
fn present_error_info<'de, D>(deserializer: D) -> Result<Option<ApiErrorBody>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(
        Option::<ApiErrorBody>::deserialize(deserializer)?.unwrap_or_default(),
    ))
}

/// Classification of a precheck response.
#[derive(Debug, Clone, PartialEq)]
pub enum PrecheckOutcome {
    /// The order can be placed.
    Placeable,
    /// Syntactically and semantically valid, but a business condition
    /// (funding, margin) would prevent placement.
    FunctionalError(ApiErrorBody),
    /// The order violates the gateway's rules and cannot be placed.
    Rejected {
        /// The `PreCheckResult` value returned.
        result: String,
        error_info: Option<ApiErrorBody>,
    },
}

impl PrecheckResponse {
    /// Classify the response.
    pub fn outcome(&self) -> PrecheckOutcome {
        if self.pre_check_result != PRECHECK_OK {
            return PrecheckOutcome::Rejected {
                result: self.pre_check_result.clone(),
                error_info: self.error_info.clone(),
            };
        }
        match &self.error_info {
            Some(info) => PrecheckOutcome::FunctionalError(info.clone()),
            None => PrecheckOutcome::Placeable,
        }
    }
}

impl PrecheckOutcome {
    pub fn is_placeable(&self) -> bool {
        matches!(self, Self::Placeable)
    }
}
