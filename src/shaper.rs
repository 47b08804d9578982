//! Order shaping: make an order's fields agree with its order type and
//! duration.
//!
//! Both transforms clear every field they own before setting the subset the
//! selected type or duration requires, so applying the same selection twice
//! yields the same order. On an unsupported value or a malformed order they
//! return an error and leave the order untouched.
//!
//! ```
//! use saxo_multileg::shaper::{self, ShapingRules};
//! use saxo_multileg::types::{order::Order, OrderType};
//!
//! let mut order = Order::from_json(r#"{"OrderType": "Market"}"#).unwrap();
//! shaper::apply_order_type(&mut order, OrderType::StopLimit, &ShapingRules::default());
//! assert_eq!(order.number("OrderPrice"), Some(70.0));
//! assert_eq!(order.number("StopLimitPrice"), Some(71.0));
//! ```

use chrono::{Local, NaiveDateTime, TimeDelta};
use serde_json::Value;

use crate::constants::{
    DEFAULT_GOOD_TILL_DATE_DAYS, DEFAULT_REFERENCE_PRICE, DEFAULT_TRAILING_DISTANCE,
    DEFAULT_TRAILING_STEP, STOP_LIMIT_OFFSET,
};
use crate::error::{Result, SaxoError};
use crate::types::enums::{DurationType, OrderType};
use crate::types::order::{Order, fields};

/// Format of `OrderDuration.ExpirationDateTime`: local time, minute
/// precision, seconds always zero.
pub const EXPIRATION_FORMAT: &str = "%Y-%m-%dT%H:%M:00";

/// Values the shaper writes into an order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapingRules {
    /// Price written to `OrderPrice`. Callers with quote access should pass
    /// the instrument's current price.
    pub reference_price: f64,
    /// `TrailingstopDistanceToMarket` for trailing stop orders.
    pub trailing_distance: f64,
    /// `TrailingStopStep` for trailing stop orders.
    pub trailing_step: f64,
    /// How far ahead of now a `GoodTillDate` order expires.
    pub good_till_date_offset: TimeDelta,
}

impl Default for ShapingRules {
    fn default() -> Self {
        Self {
            reference_price: DEFAULT_REFERENCE_PRICE,
            trailing_distance: DEFAULT_TRAILING_DISTANCE,
            trailing_step: DEFAULT_TRAILING_STEP,
            good_till_date_offset: TimeDelta::days(DEFAULT_GOOD_TILL_DATE_DAYS),
        }
    }
}

impl ShapingRules {
    /// Default rules with a specific reference price.
    pub fn with_reference_price(reference_price: f64) -> Self {
        Self {
            reference_price,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Order type
// ---------------------------------------------------------------------------

/// Set `OrderType` and make the price fields match it.
///
/// | Order type | Price fields |
/// |---|---|
/// | `Market` | none |
/// | `Limit`, `StopIfBid`, `StopIfOffered`, `StopIfTraded` | `OrderPrice` |
/// | `StopLimit` | `OrderPrice`, `StopLimitPrice` |
/// | `TrailingStop*` | `OrderPrice`, `TrailingstopDistanceToMarket`, `TrailingStopStep` |
pub fn apply_order_type(order: &mut Order, order_type: OrderType, rules: &ShapingRules) {
    order.insert(fields::ORDER_TYPE, order_type.as_str());
    for field in fields::PRICE_FIELDS {
        order.remove(field);
    }

    if !order_type.requires_price() {
        return;
    }
    order.insert(fields::ORDER_PRICE, rules.reference_price);

    if order_type == OrderType::StopLimit {
        order.insert(
            fields::STOP_LIMIT_PRICE,
            rules.reference_price + STOP_LIMIT_OFFSET,
        );
    } else if order_type.is_trailing() {
        order.insert(fields::TRAILING_STOP_DISTANCE, rules.trailing_distance);
        order.insert(fields::TRAILING_STOP_STEP, rules.trailing_step);
    }
}

/// Parse `name` as an [`OrderType`] and apply it.
///
/// An unknown name returns [`SaxoError::UnsupportedOrderType`] without
/// touching the order.
pub fn apply_order_type_name(
    order: &mut Order,
    name: &str,
    rules: &ShapingRules,
) -> Result<OrderType> {
    let order_type: OrderType = name.parse()?;
    apply_order_type(order, order_type, rules);
    Ok(order_type)
}

// ---------------------------------------------------------------------------
// Order duration
// ---------------------------------------------------------------------------

/// Set `OrderDuration.DurationType` and make the expiration fields match it.
///
/// `now` is the local wall-clock time the `GoodTillDate` expiration is
/// computed from. The order must already carry an `OrderDuration` object;
/// otherwise [`SaxoError::MalformedOrder`] is returned and nothing changes.
pub fn apply_order_duration(
    order: &mut Order,
    duration: DurationType,
    now: NaiveDateTime,
    rules: &ShapingRules,
) -> Result<()> {
    // Compute everything fallible before the first write.
    let expiration = if duration.has_expiration() {
        Some(expiration_after(now, rules.good_till_date_offset)?)
    } else {
        None
    };

    let Some(sub) = order.duration_mut() else {
        return Err(SaxoError::MalformedOrder(format!(
            "{} object is missing",
            fields::ORDER_DURATION
        )));
    };

    sub.insert(
        fields::DURATION_TYPE.to_owned(),
        Value::from(duration.as_str()),
    );
    match expiration {
        Some(expiration) => {
            sub.insert(
                fields::EXPIRATION_DATE_TIME.to_owned(),
                Value::from(expiration),
            );
            sub.insert(fields::EXPIRATION_CONTAINS_TIME.to_owned(), Value::Bool(true));
        }
        None => {
            sub.remove(fields::EXPIRATION_DATE_TIME);
            sub.remove(fields::EXPIRATION_CONTAINS_TIME);
        }
    }
    Ok(())
}

/// [`apply_order_duration`] using the current local time.
pub fn apply_order_duration_now(
    order: &mut Order,
    duration: DurationType,
    rules: &ShapingRules,
) -> Result<()> {
    apply_order_duration(order, duration, Local::now().naive_local(), rules)
}

/// Parse `name` as a [`DurationType`] and apply it.
///
/// An unknown name returns [`SaxoError::UnsupportedDuration`] without
/// touching the order.
pub fn apply_order_duration_name(
    order: &mut Order,
    name: &str,
    now: NaiveDateTime,
    rules: &ShapingRules,
) -> Result<DurationType> {
    let duration: DurationType = name.parse()?;
    apply_order_duration(order, duration, now, rules)?;
    Ok(duration)
}

/// Expiration timestamp `offset` after `now`, seconds zeroed.
pub fn expiration_after(now: NaiveDateTime, offset: TimeDelta) -> Result<String> {
    let at = now.checked_add_signed(offset).ok_or_else(|| {
        SaxoError::InvalidArgument(format!("expiration offset {offset} out of range"))
    })?;
    Ok(at.format(EXPIRATION_FORMAT).to_string())
}
