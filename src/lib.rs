//! # saxo-multileg
//!
//! A Rust client for the multi-leg option order endpoints of the Saxo
//! OpenAPI gateway, plus the order shaping rules that keep an order body
//! consistent with its order type and duration.
//!
//! ## Quick Start
//!
//! ```no_run
//! use saxo_multileg::{OrderSession, SaxoClient};
//! use saxo_multileg::types::{order::Order, OrderType};
//!
//! #[tokio::main]
//! async fn main() -> saxo_multileg::error::Result<()> {
//!     let client = SaxoClient::new("your-access-token", "your-account-key")?;
//!     let order = Order::from_json(r#"{"BuySell": "Buy", "Amount": 1}"#)?;
//!     let mut session = OrderSession::new(client, order)?;
//!     session.load_strategy("19", "Straddle").await?;
//!     session.select_order_type(OrderType::Limit);
//!     let (outcome, _) = session.precheck().await?;
//!     if outcome.is_placeable() {
//!         session.place().await?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod session;
pub mod shaper;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::SaxoClient;
/// Re-export the error type and Result alias.
pub use error::{Result, SaxoError};
pub use session::OrderSession;
