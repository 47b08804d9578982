//! The multi-leg order body and its legs.
//!
//! An [`Order`] is kept as an ordered JSON object rather than a fixed struct:
//! orders are authored as free-form JSON and any field the crate does not know
//! about must reach the gateway untouched. Typed accessors cover the fields
//! the shaper and the session work with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{Result, SaxoError};
use crate::types::enums::{BuySell, DurationType, OrderType, ToOpenClose};

/// JSON field names of the order body.
pub mod fields {
    pub const ACCOUNT_KEY: &str = "AccountKey";
    pub const ORDER_TYPE: &str = "OrderType";
    pub const ORDER_PRICE: &str = "OrderPrice";
    pub const STOP_LIMIT_PRICE: &str = "StopLimitPrice";
    pub const TRAILING_STOP_DISTANCE: &str = "TrailingstopDistanceToMarket";
    pub const TRAILING_STOP_STEP: &str = "TrailingStopStep";
    pub const ORDER_DURATION: &str = "OrderDuration";
    pub const DURATION_TYPE: &str = "DurationType";
    pub const EXPIRATION_DATE_TIME: &str = "ExpirationDateTime";
    pub const EXPIRATION_CONTAINS_TIME: &str = "ExpirationDateContainsTime";
    pub const LEGS: &str = "Legs";
    pub const EXTERNAL_REFERENCE: &str = "ExternalReference";
    pub const MULTI_LEG_ORDER_ID: &str = "MultiLegOrderId";
    pub const FIELD_GROUPS: &str = "FieldGroups";

    /// Every price field whose presence depends on the order type.
    pub const PRICE_FIELDS: [&str; 4] = [
        ORDER_PRICE,
        STOP_LIMIT_PRICE,
        TRAILING_STOP_DISTANCE,
        TRAILING_STOP_STEP,
    ];
}

// ---------------------------------------------------------------------------
// Leg
// ---------------------------------------------------------------------------

/// A single option leg of a multi-leg order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Leg {
    /// Instrument identifier of the option contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uic: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_sell: Option<BuySell>,
    /// Kept as a JSON number so integer amounts stay integers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_open_close: Option<ToOpenClose>,
    /// Remaining leg fields, passed through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// A multi-leg order body as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(Map<String, Value>);

impl Order {
    /// An empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an order from JSON text.
    ///
    /// Fails with [`SaxoError::Json`] on invalid JSON and
    /// [`SaxoError::MalformedOrder`] when the text is not a JSON object.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Wrap a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(SaxoError::MalformedOrder(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Pretty-printed JSON, as it would be shown for editing.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Mutably borrow the underlying JSON object.
    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: &str, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.to_owned(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    /// Numeric value of a field, if present and numeric.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(Value::as_f64)
    }

    /// String value of a field, if present and a string.
    pub fn string(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    // -- typed accessors ---------------------------------------------------

    /// The order's `OrderType`, if set. Unknown strings are an error.
    pub fn order_type(&self) -> Result<Option<OrderType>> {
        self.string(fields::ORDER_TYPE)
            .map(str::parse::<OrderType>)
            .transpose()
    }

    pub fn account_key(&self) -> Option<&str> {
        self.string(fields::ACCOUNT_KEY)
    }

    pub fn set_account_key(&mut self, account_key: &str) {
        self.insert(fields::ACCOUNT_KEY, account_key);
    }

    pub fn external_reference(&self) -> Option<&str> {
        self.string(fields::EXTERNAL_REFERENCE)
    }

    /// The `OrderDuration` sub-object, if present and an object.
    pub fn duration(&self) -> Option<&Map<String, Value>> {
        self.0.get(fields::ORDER_DURATION).and_then(Value::as_object)
    }

    pub fn duration_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.0
            .get_mut(fields::ORDER_DURATION)
            .and_then(Value::as_object_mut)
    }

    /// The `OrderDuration.DurationType`, if set. Unknown strings are an error.
    pub fn duration_type(&self) -> Result<Option<DurationType>> {
        self.duration()
            .and_then(|d| d.get(fields::DURATION_TYPE))
            .and_then(Value::as_str)
            .map(str::parse::<DurationType>)
            .transpose()
    }

    /// Replace `OrderDuration` with a fresh object holding only the type.
    pub fn reset_duration(&mut self, duration: DurationType) {
        let mut map = Map::new();
        map.insert(fields::DURATION_TYPE.to_owned(), duration.as_str().into());
        self.0
            .insert(fields::ORDER_DURATION.to_owned(), Value::Object(map));
    }

    /// Decode the `Legs` array. A missing array yields no legs.
    pub fn legs(&self) -> Result<Vec<Leg>> {
        match self.0.get(fields::LEGS) {
            Some(value) => Ok(Vec::<Leg>::deserialize(value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the `Legs` array with legs from a fetched strategy, tagging
    /// each one `ToOpen`.
    pub fn set_opening_legs(&mut self, mut legs: Vec<Leg>) -> Result<()> {
        for leg in &mut legs {
            leg.to_open_close = Some(ToOpenClose::ToOpen);
        }
        let value = serde_json::to_value(&legs)?;
        self.0.insert(fields::LEGS.to_owned(), value);
        Ok(())
    }
}

impl From<Map<String, Value>> for Order {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
