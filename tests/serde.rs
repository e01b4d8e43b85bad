#![cfg(feature = "serde")]

use floatscan::{from_str_prefix, Parsed};

#[test]
fn parsed_round_trips_through_json() {
    let parsed = from_str_prefix("365.24.1.1 29.53").unwrap();
    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(json, r#"{"value":365.24,"len":6}"#);

    let back: Parsed = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parsed);
}

#[test]
fn missing_field_is_rejected() {
    let err = serde_json::from_str::<Parsed>(r#"{"value":1.0}"#).unwrap_err();
    assert!(err.to_string().contains("missing field `len`"));
}

#[test]
fn duplicate_field_is_rejected() {
    let err = serde_json::from_str::<Parsed>(r#"{"len":1,"value":1.0,"len":2}"#).unwrap_err();
    assert!(err.to_string().contains("duplicate field `len`"));
}

#[test]
fn unknown_field_is_rejected() {
    let err = serde_json::from_str::<Parsed>(r#"{"value":1.0,"offset":6}"#).unwrap_err();
    assert!(err.to_string().contains("unknown field `offset`"));
}
