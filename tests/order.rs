//! Order body parsing and the typed accessors the session relies on.

use saxo_multileg::error::SaxoError;
use saxo_multileg::types::order::{Leg, Order};
use saxo_multileg::types::{BuySell, DurationType, OrderType, ToOpenClose};
use serde_json::json;

#[test]
fn invalid_json_is_a_json_error() {
    let err = Order::from_json(r#"{"OrderType": "Limit",,}"#).unwrap_err();
    assert!(matches!(err, SaxoError::Json(_)));
}

#[test]
fn non_object_json_is_malformed() {
    let err = Order::from_json(r#"[1, 2, 3]"#).unwrap_err();
    match err {
        SaxoError::MalformedOrder(msg) => assert!(msg.contains("an array"), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_fields_survive_a_round_trip() {
    let text = r#"{
        "Uic": 1234,
        "ManualOrder": true,
        "OrderType": "Limit",
        "Legs": [{ "Uic": 1, "BuySell": "Buy", "Amount": 1, "StrikePrice": 95.0 }]
    }"#;
    let order = Order::from_json(text).unwrap();
    let again = Order::from_json(&order.to_json_pretty().unwrap()).unwrap();

    assert_eq!(order, again);
    assert_eq!(again.get("ManualOrder"), Some(&json!(true)));
}

#[test]
fn typed_order_type_and_duration() {
    let order = Order::from_value(json!({
        "OrderType": "StopIfTraded",
        "OrderDuration": { "DurationType": "FillOrKill" }
    }))
    .unwrap();

    assert_eq!(order.order_type().unwrap(), Some(OrderType::StopIfTraded));
    assert_eq!(order.duration_type().unwrap(), Some(DurationType::FillOrKill));
}

#[test]
fn missing_type_and_duration_are_none() {
    let order = Order::new();
    assert_eq!(order.order_type().unwrap(), None);
    assert_eq!(order.duration_type().unwrap(), None);
    assert!(order.legs().unwrap().is_empty());
}

#[test]
fn unknown_order_type_string_is_reported() {
    let order = Order::from_value(json!({ "OrderType": "Iceberg" })).unwrap();
    assert!(matches!(
        order.order_type(),
        Err(SaxoError::UnsupportedOrderType(ref s)) if s == "Iceberg"
    ));
}

#[test]
fn account_key_is_overwritten() {
    let mut order = Order::from_value(json!({ "AccountKey": "typed-by-hand" })).unwrap();
    order.set_account_key("abc|123");
    assert_eq!(order.account_key(), Some("abc|123"));
}

#[test]
fn reset_duration_drops_stale_expiration() {
    let mut order = Order::from_value(json!({
        "OrderDuration": {
            "DurationType": "GoodTillDate",
            "ExpirationDateTime": "2026-01-01T10:00:00",
            "ExpirationDateContainsTime": true
        }
    }))
    .unwrap();

    order.reset_duration(DurationType::DayOrder);

    assert_eq!(
        order.get("OrderDuration"),
        Some(&json!({ "DurationType": "DayOrder" }))
    );
}

#[test]
fn opening_legs_are_tagged_to_open() {
    let legs: Vec<Leg> = serde_json::from_value(json!([
        { "Uic": 101, "AssetType": "StockOption", "BuySell": "Buy", "Amount": 1, "PutCall": "Call" },
        { "Uic": 102, "AssetType": "StockOption", "BuySell": "Sell", "Amount": 1, "ToOpenClose": "ToClose" }
    ]))
    .unwrap();

    let mut order = Order::new();
    order.set_opening_legs(legs).unwrap();
    let merged = order.legs().unwrap();

    assert_eq!(merged.len(), 2);
    assert!(merged.iter().all(|l| l.to_open_close == Some(ToOpenClose::ToOpen)));
    assert_eq!(merged[0].uic, Some(101));
    assert_eq!(merged[1].buy_sell, Some(BuySell::Sell));
    assert_eq!(merged[0].extra.get("PutCall"), Some(&json!("Call")));
    assert_eq!(order.get("Legs").unwrap()[1]["ToOpenClose"], "ToOpen");
}

#[test]
fn leg_amounts_keep_their_number_form() {
    let legs: Vec<Leg> = serde_json::from_value(json!([
        { "Uic": 1, "BuySell": "Buy", "Amount": 1 },
        { "Uic": 2, "BuySell": "Sell", "Amount": 2.5 }
    ]))
    .unwrap();

    let mut order = Order::new();
    order.set_opening_legs(legs).unwrap();

    assert_eq!(
        order.get("Legs").unwrap(),
        &json!([
            { "Uic": 1, "BuySell": "Buy", "Amount": 1, "ToOpenClose": "ToOpen" },
            { "Uic": 2, "BuySell": "Sell", "Amount": 2.5, "ToOpenClose": "ToOpen" }
        ])
    );
    assert_eq!(
        serde_json::to_string(&order.get("Legs").unwrap()[0]["Amount"]).unwrap(),
        "1"
    );
}

#[test]
fn enum_names_parse_and_reject() {
    assert_eq!("TrailingStopIfBid".parse::<OrderType>().unwrap(), OrderType::TrailingStopIfBid);
    assert_eq!("GoodTillDate".parse::<DurationType>().unwrap(), DurationType::GoodTillDate);
    assert!(matches!("limit".parse::<OrderType>(), Err(SaxoError::UnsupportedOrderType(_))));
    assert!(matches!("Day".parse::<DurationType>(), Err(SaxoError::UnsupportedDuration(_))));
}
