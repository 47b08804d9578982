//! Integration tests against the Saxo simulation gateway
//! (`https://gateway.saxobank.com/sim/openapi`).
//!
//! # Running
//!
//! These tests require a SIM access token and account key. Set the following
//! environment variables before running:
//!
//! ```sh
//! export SAXO_ACCESS_TOKEN="your-24h-sim-token"
//! export SAXO_ACCOUNT_KEY="your-account-key"
//! export SAXO_OPTION_ROOT_ID="19"   # optional
//! cargo test --test sim -- --nocapture
//! ```
//!
//! Without these env vars, every test is silently skipped.
//!
//! # What is tested
//!
//! - **Option series**: supported order types for the option root
//! - **Strategy**: prefilled legs merged into an order
//! - **Precheck**: the response classifies without a transport error
//! - **Lifecycle**: place → modify → cancel through one session
//! - **Error handling**: a bogus cancel produces a typed error

use saxo_multileg::config::Config;
use saxo_multileg::error::SaxoError;
use saxo_multileg::types::order::Order;
use saxo_multileg::types::{DurationType, OrderType};
use saxo_multileg::{OrderSession, SaxoClient};
use serde_json::json;

const DEFAULT_OPTION_ROOT_ID: &str = "19";

/// Helper: create a SIM client or skip the test.
fn sim_client() -> Option<SaxoClient> {
    let config = Config::from_env().ok()?;
    SaxoClient::from_config(&config).ok()
}

fn option_root_id() -> String {
    std::env::var("SAXO_OPTION_ROOT_ID").unwrap_or_else(|_| DEFAULT_OPTION_ROOT_ID.into())
}

/// Macro to skip a test when credentials are missing.
macro_rules! require_client {
    () => {
        match sim_client() {
            Some(c) => c,
            None => {
                eprintln!("⏭  Skipped (SAXO_ACCESS_TOKEN / SAXO_ACCOUNT_KEY not set)");
                return;
            }
        }
    };
}

fn starting_order() -> Order {
    Order::from_value(json!({
        "OrderType": "Limit",
        "OrderDuration": { "DurationType": "DayOrder" },
        "ManualOrder": true,
        "ExternalReference": "saxo-multileg-sim"
    }))
    .unwrap()
}

// ===================================================================
// Reference data
// ===================================================================

#[tokio::test]
async fn test_option_series() {
    let client = require_client!();
    let space = client
        .get_option_space(&option_root_id())
        .await
        .expect("get_option_space failed");
    assert!(
        !space.supported_order_types.is_empty(),
        "option root should list supported order types"
    );
    println!("✔ Series: supported={:?}", space.supported_order_types);
}

#[tokio::test]
async fn test_strategy_defaults() {
    let client = require_client!();
    let mut session = OrderSession::new(client, starting_order()).unwrap();
    session
        .load_strategy(&option_root_id(), "Straddle")
        .await
        .expect("load_strategy failed");

    let legs = session.order().legs().unwrap();
    assert!(!legs.is_empty(), "strategy should have legs");
    println!("✔ Strategy: {} legs", legs.len());
}

// ===================================================================
// Orders: full lifecycle
// ===================================================================

#[tokio::test]
async fn test_order_lifecycle() {
    let client = require_client!();
    let mut session = OrderSession::new(client, starting_order()).unwrap();

    // 1. Prefill a strategy and shape it as a GTD limit order
    session
        .load_strategy(&option_root_id(), "Straddle")
        .await
        .expect("load_strategy failed");
    session.select_order_type(OrderType::Limit);
    session
        .select_duration(DurationType::GoodTillDate)
        .expect("select_duration failed");

    // 2. Precheck
    let (outcome, response) = session.precheck().await.expect("precheck failed");
    println!("✔ Precheck: {outcome:?}");
    if !outcome.is_placeable() {
        eprintln!("⏭  Order not placeable on this account: {response:?}");
        return;
    }

    // 3. Place
    let placed = session.place().await.expect("place failed");
    println!("✔ Placed: {}", placed.body.multi_leg_order_id);

    // 4. Modify
    session.select_duration(DurationType::GoodTillCancel).unwrap();
    session.modify().await.expect("modify failed");
    println!("✔ Modified");

    // 5. Cancel
    session.cancel().await.expect("cancel failed");
    assert_eq!(session.last_order_id(), None);
    println!("✔ Cancelled");
}

// ===================================================================
// Error handling
// ===================================================================

#[tokio::test]
async fn test_cancel_unknown_order_is_typed_error() {
    let client = require_client!();
    let err = client
        .cancel_order("0")
        .await
        .expect_err("cancelling order 0 should fail");
    assert!(
        matches!(err, SaxoError::Api(_) | SaxoError::HttpStatus { .. }),
        "unexpected error: {err}"
    );
    println!("✔ Bogus cancel: {err}");
}
