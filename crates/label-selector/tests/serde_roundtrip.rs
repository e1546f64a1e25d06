//! Integration tests for serde round-tripping of selectors.
#![expect(clippy::expect_used, reason = "tests assert serde outcomes")]

use std::collections::HashMap;

use label_selector::{Selector, parse};

#[test]
fn serialises_as_selector_text() {
    let selector = parse("app == web, tier in (a, b)").expect("selector should parse");
    let json = serde_json::to_string(&selector).expect("selector should serialise");
    assert_eq!(json, r#""app=web, tier in (a, b)""#);
}

#[test]
fn deserialises_by_parsing() {
    let selectors: HashMap<String, Selector> =
        serde_json::from_str(r#"{"web": "app=web, !canary"}"#).expect("payload should decode");
    assert_eq!(
        selectors.get("web"),
        Some(&Selector::And(vec![
            Selector::Equals {
                key: "app".into(),
                value: "web".into(),
            },
            Selector::NotHasKey("canary".into()),
        ]))
    );
}

#[test]
fn rejects_invalid_selector_payloads() {
    let err = serde_json::from_str::<Selector>(r#""x<a""#)
        .expect_err("invalid selector should not decode");
    assert!(err.to_string().contains("invalid operator"));
    assert!(serde_json::from_str::<Selector>("42").is_err());
}
