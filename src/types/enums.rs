//! Shared enum types that map directly to OpenAPI string values.
//!
//! Variant names match the PascalCase wire format, so serde needs no renames.
//! Each enum also parses from its wire string via [`FromStr`], returning the
//! matching "unsupported" error for anything else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SaxoError;

// ---------------------------------------------------------------------------
// Order Type
// ---------------------------------------------------------------------------

/// Type of a multi-leg order. Determines which price fields the order body
/// carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Buy below / sell above `OrderPrice`.
    Limit,
    /// Filled at the best price available.
    Market,
    /// Triggers when the bid reaches `OrderPrice`.
    StopIfBid,
    /// Triggers when the offer reaches `OrderPrice`.
    StopIfOffered,
    /// Triggers when the last traded price reaches `OrderPrice`.
    StopIfTraded,
    /// Becomes a limit order at `StopLimitPrice` once `OrderPrice` is crossed.
    StopLimit,
    /// Stop that follows the market in `TrailingStopStep` increments.
    TrailingStop,
    TrailingStopIfBid,
    TrailingStopIfOffered,
    TrailingStopIfTraded,
}

impl OrderType {
    /// Every supported order type, in the order the gateway lists them.
    pub const ALL: [OrderType; 10] = [
        Self::Limit,
        Self::Market,
        Self::StopIfBid,
        Self::StopIfOffered,
        Self::StopIfTraded,
        Self::StopLimit,
        Self::TrailingStop,
        Self::TrailingStopIfBid,
        Self::TrailingStopIfOffered,
        Self::TrailingStopIfTraded,
    ];

    /// The wire string for this order type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Limit => "Limit",
            Self::Market => "Market",
            Self::StopIfBid => "StopIfBid",
            Self::StopIfOffered => "StopIfOffered",
            Self::StopIfTraded => "StopIfTraded",
            Self::StopLimit => "StopLimit",
            Self::TrailingStop => "TrailingStop",
            Self::TrailingStopIfBid => "TrailingStopIfBid",
            Self::TrailingStopIfOffered => "TrailingStopIfOffered",
            Self::TrailingStopIfTraded => "TrailingStopIfTraded",
        }
    }

    /// Whether the order carries an `OrderPrice`.
    pub fn requires_price(self) -> bool {
        !matches!(self, Self::Market)
    }

    /// Whether the order is one of the four trailing stop variants.
    pub fn is_trailing(self) -> bool {
        matches!(
            self,
            Self::TrailingStop
                | Self::TrailingStopIfBid
                | Self::TrailingStopIfOffered
                | Self::TrailingStopIfTraded
        )
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = SaxoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SaxoError::UnsupportedOrderType(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Duration Type
// ---------------------------------------------------------------------------

/// Time-in-force policy of an order (`OrderDuration.DurationType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationType {
    /// Expires at the end of the trading day.
    DayOrder,
    /// Works until explicitly cancelled.
    GoodTillCancel,
    /// Fills completely at once or is cancelled.
    FillOrKill,
    /// Works for a very short time; whatever filled forms the position.
    ImmediateOrCancel,
    /// Works until `ExpirationDateTime`.
    GoodTillDate,
}

impl DurationType {
    /// Every supported duration type.
    pub const ALL: [DurationType; 5] = [
        Self::DayOrder,
        Self::GoodTillCancel,
        Self::FillOrKill,
        Self::ImmediateOrCancel,
        Self::GoodTillDate,
    ];

    /// The wire string for this duration type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DayOrder => "DayOrder",
            Self::GoodTillCancel => "GoodTillCancel",
            Self::FillOrKill => "FillOrKill",
            Self::ImmediateOrCancel => "ImmediateOrCancel",
            Self::GoodTillDate => "GoodTillDate",
        }
    }

    /// Whether the duration carries an explicit expiration.
    pub fn has_expiration(self) -> bool {
        matches!(self, Self::GoodTillDate)
    }
}

impl fmt::Display for DurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationType {
    type Err = SaxoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| SaxoError::UnsupportedDuration(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Buy / Sell
// ---------------------------------------------------------------------------

/// Side of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuySell {
    Buy,
    Sell,
}

// ---------------------------------------------------------------------------
// To Open / Close
// ---------------------------------------------------------------------------

/// Whether a leg opens a new position or closes an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToOpenClose {
    ToOpen,
    ToClose,
}
