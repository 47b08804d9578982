//! Order shaping rules: field sets per order type, duration expiration
//! handling, idempotence, and untouched orders on bad input.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use saxo_multileg::error::SaxoError;
use saxo_multileg::shaper::{self, ShapingRules};
use saxo_multileg::types::order::{Order, fields};
use saxo_multileg::types::{DurationType, OrderType};
use serde_json::json;

fn order(value: serde_json::Value) -> Order {
    Order::from_value(value).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

/// Price fields present on the order, in `PRICE_FIELDS` order.
fn price_fields(order: &Order) -> Vec<&'static str> {
    fields::PRICE_FIELDS
        .into_iter()
        .filter(|f| order.contains(f))
        .collect()
}

/// An order carrying every price field plus an unrelated one.
fn cluttered() -> Order {
    order(json!({
        "OrderType": "TrailingStop",
        "OrderPrice": 12.5,
        "StopLimitPrice": 13.5,
        "TrailingstopDistanceToMarket": 2,
        "TrailingStopStep": 0.5,
        "ExternalReference": "ref-1",
        "OrderDuration": { "DurationType": "DayOrder" }
    }))
}

// ===================================================================
// Order type
// ===================================================================

#[test]
fn each_order_type_sets_exactly_its_fields() {
    let expected: [(OrderType, &[&str]); 10] = [
        (OrderType::Limit, &["OrderPrice"]),
        (OrderType::Market, &[]),
        (OrderType::StopIfBid, &["OrderPrice"]),
        (OrderType::StopIfOffered, &["OrderPrice"]),
        (OrderType::StopIfTraded, &["OrderPrice"]),
        (OrderType::StopLimit, &["OrderPrice", "StopLimitPrice"]),
        (
            OrderType::TrailingStop,
            &["OrderPrice", "TrailingstopDistanceToMarket", "TrailingStopStep"],
        ),
        (
            OrderType::TrailingStopIfBid,
            &["OrderPrice", "TrailingstopDistanceToMarket", "TrailingStopStep"],
        ),
        (
            OrderType::TrailingStopIfOffered,
            &["OrderPrice", "TrailingstopDistanceToMarket", "TrailingStopStep"],
        ),
        (
            OrderType::TrailingStopIfTraded,
            &["OrderPrice", "TrailingstopDistanceToMarket", "TrailingStopStep"],
        ),
    ];

    let rules = ShapingRules::default();
    for (order_type, want) in expected {
        let mut o = cluttered();
        shaper::apply_order_type(&mut o, order_type, &rules);
        assert_eq!(price_fields(&o), want, "fields for {order_type}");
        assert_eq!(o.string("OrderType"), Some(order_type.as_str()));
        assert_eq!(o.string("ExternalReference"), Some("ref-1"));
    }
}

#[test]
fn market_to_limit_adds_order_price_only() {
    let mut o = order(json!({ "OrderType": "Market" }));
    shaper::apply_order_type(&mut o, OrderType::Limit, &ShapingRules::default());

    assert_eq!(o.string("OrderType"), Some("Limit"));
    assert_eq!(o.number("OrderPrice"), Some(70.0));
    assert!(!o.contains("StopLimitPrice"));
    assert!(!o.contains("TrailingstopDistanceToMarket"));
    assert!(!o.contains("TrailingStopStep"));
}

#[test]
fn stop_limit_price_is_one_above_order_price() {
    let mut o = order(json!({ "OrderType": "StopLimit" }));
    shaper::apply_order_type(&mut o, OrderType::StopLimit, &ShapingRules::with_reference_price(70.0));

    assert_eq!(o.number("OrderPrice"), Some(70.0));
    assert_eq!(o.number("StopLimitPrice"), Some(71.0));
}

#[test]
fn trailing_stop_uses_rule_values() {
    let rules = ShapingRules {
        reference_price: 42.0,
        trailing_distance: 2.5,
        trailing_step: 0.25,
        ..ShapingRules::default()
    };
    let mut o = Order::new();
    shaper::apply_order_type(&mut o, OrderType::TrailingStopIfTraded, &rules);

    assert_eq!(o.number("OrderPrice"), Some(42.0));
    assert_eq!(o.number("TrailingstopDistanceToMarket"), Some(2.5));
    assert_eq!(o.number("TrailingStopStep"), Some(0.25));
}

#[test]
fn default_trailing_values() {
    let mut o = Order::new();
    shaper::apply_order_type(&mut o, OrderType::TrailingStop, &ShapingRules::default());

    assert_eq!(o.number("TrailingstopDistanceToMarket"), Some(1.0));
    assert_eq!(o.number("TrailingStopStep"), Some(0.1));
}

#[test]
fn applying_the_same_type_twice_is_idempotent() {
    let rules = ShapingRules::default();
    for order_type in OrderType::ALL {
        let mut once = cluttered();
        shaper::apply_order_type(&mut once, order_type, &rules);
        let mut twice = once.clone();
        shaper::apply_order_type(&mut twice, order_type, &rules);
        assert_eq!(once, twice, "{order_type} is not idempotent");
    }
}

#[test]
fn unsupported_order_type_leaves_order_unchanged() {
    let mut o = cluttered();
    let before = o.clone();

    let err = shaper::apply_order_type_name(&mut o, "StopOnFullMoon", &ShapingRules::default())
        .unwrap_err();

    assert!(matches!(err, SaxoError::UnsupportedOrderType(ref s) if s == "StopOnFullMoon"));
    assert_eq!(o, before);
}

#[test]
fn order_type_by_name() {
    let mut o = Order::new();
    let t = shaper::apply_order_type_name(&mut o, "StopIfBid", &ShapingRules::default()).unwrap();
    assert_eq!(t, OrderType::StopIfBid);
    assert_eq!(price_fields(&o), ["OrderPrice"]);
}

// ===================================================================
// Duration
// ===================================================================

fn gtd_order() -> Order {
    order(json!({
        "OrderType": "Limit",
        "OrderDuration": {
            "DurationType": "GoodTillDate",
            "ExpirationDateTime": "2026-01-01T10:00:00",
            "ExpirationDateContainsTime": true
        }
    }))
}

#[test]
fn non_dated_durations_drop_expiration() {
    let now = at(2026, 10, 17, 9, 30, 15);
    for duration in [
        DurationType::DayOrder,
        DurationType::GoodTillCancel,
        DurationType::FillOrKill,
        DurationType::ImmediateOrCancel,
    ] {
        let mut o = gtd_order();
        shaper::apply_order_duration(&mut o, duration, now, &ShapingRules::default()).unwrap();

        let sub = o.duration().unwrap();
        assert_eq!(sub.get("DurationType").unwrap(), duration.as_str());
        assert!(!sub.contains_key("ExpirationDateTime"), "{duration}");
        assert!(!sub.contains_key("ExpirationDateContainsTime"), "{duration}");
    }
}

#[test]
fn good_till_date_is_three_days_ahead_with_zero_seconds() {
    let mut o = order(json!({ "OrderDuration": { "DurationType": "DayOrder" } }));
    let now = at(2026, 10, 17, 14, 37, 52);

    shaper::apply_order_duration(&mut o, DurationType::GoodTillDate, now, &ShapingRules::default())
        .unwrap();

    let sub = o.duration().unwrap();
    assert_eq!(sub.get("DurationType").unwrap(), "GoodTillDate");
    assert_eq!(sub.get("ExpirationDateTime").unwrap(), "2026-10-20T14:37:00");
    assert_eq!(sub.get("ExpirationDateContainsTime").unwrap(), true);
}

#[test]
fn good_till_date_crosses_month_end() {
    let mut o = order(json!({ "OrderDuration": {} }));
    let now = at(2026, 12, 30, 23, 5, 59);

    shaper::apply_order_duration(&mut o, DurationType::GoodTillDate, now, &ShapingRules::default())
        .unwrap();

    assert_eq!(
        o.duration().unwrap().get("ExpirationDateTime").unwrap(),
        "2027-01-02T23:05:00"
    );
}

#[test]
fn good_till_date_offset_is_configurable() {
    let rules = ShapingRules {
        good_till_date_offset: TimeDelta::days(10),
        ..ShapingRules::default()
    };
    let mut o = order(json!({ "OrderDuration": {} }));

    shaper::apply_order_duration(&mut o, DurationType::GoodTillDate, at(2026, 3, 1, 8, 0, 0), &rules)
        .unwrap();

    assert_eq!(
        o.duration().unwrap().get("ExpirationDateTime").unwrap(),
        "2026-03-11T08:00:00"
    );
}

#[test]
fn duration_shaping_is_idempotent() {
    let now = at(2026, 10, 17, 14, 37, 52);
    let rules = ShapingRules::default();
    for duration in DurationType::ALL {
        let mut once = gtd_order();
        shaper::apply_order_duration(&mut once, duration, now, &rules).unwrap();
        let mut twice = once.clone();
        shaper::apply_order_duration(&mut twice, duration, now, &rules).unwrap();
        assert_eq!(once, twice, "{duration} is not idempotent");
    }
}

#[test]
fn unsupported_duration_leaves_order_unchanged() {
    let mut o = gtd_order();
    let before = o.clone();

    let err = shaper::apply_order_duration_name(
        &mut o,
        "GoodTillNextEclipse",
        at(2026, 10, 17, 9, 0, 0),
        &ShapingRules::default(),
    )
    .unwrap_err();

    assert!(matches!(err, SaxoError::UnsupportedDuration(_)));
    assert_eq!(o, before);
}

#[test]
fn missing_order_duration_is_an_error() {
    let mut o = order(json!({ "OrderType": "Market" }));
    let before = o.clone();

    let err = shaper::apply_order_duration(
        &mut o,
        DurationType::GoodTillDate,
        at(2026, 10, 17, 9, 0, 0),
        &ShapingRules::default(),
    )
    .unwrap_err();

    assert!(matches!(err, SaxoError::MalformedOrder(_)));
    assert_eq!(o, before);
}

#[test]
fn type_and_duration_shaping_are_independent() {
    let rules = ShapingRules::default();
    let now = at(2026, 10, 17, 9, 0, 0);

    let mut a = cluttered();
    shaper::apply_order_type(&mut a, OrderType::StopLimit, &rules);
    shaper::apply_order_duration(&mut a, DurationType::GoodTillDate, now, &rules).unwrap();

    let mut b = cluttered();
    shaper::apply_order_duration(&mut b, DurationType::GoodTillDate, now, &rules).unwrap();
    shaper::apply_order_type(&mut b, OrderType::StopLimit, &rules);

    assert_eq!(a, b);
}

#[test]
fn expiration_after_formats_with_zero_seconds() {
    let s = shaper::expiration_after(at(2026, 2, 3, 4, 5, 6), TimeDelta::days(3)).unwrap();
    assert_eq!(s, "2026-02-06T04:05:00");
}
