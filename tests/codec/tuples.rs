//! Integration tests for composite keys
//!
//! Tests encode/decode of whole tuples, error context, and key parsing.

use sortkey_codec::{Key, KeyBuilder, Segment, decode, encode, key};

const DEPLOYMENT_EVENT: &str =
    "[S]app#[S]uuid#[S]deployments#[P]0000000000000001#[S]events#[P]0000000010000000#";

fn deployment_event() -> Vec<Segment> {
    vec![
        Segment::from("app"),
        Segment::from("uuid"),
        Segment::from("deployments"),
        Segment::Int(1),
        Segment::from("events"),
        Segment::Int(10_000_000),
    ]
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn encodes_literal_key() {
    assert_eq!(encode(&deployment_event()).unwrap(), DEPLOYMENT_EVENT);
    assert_eq!(
        key!("app", "uuid", "deployments", 1, "events", 10_000_000).unwrap(),
        DEPLOYMENT_EVENT
    );
}

#[test]
fn decodes_literal_key() {
    assert_eq!(decode(DEPLOYMENT_EVENT).unwrap(), deployment_event());
}

#[test]
fn key_always_ends_with_separator() {
    let key = encode(&deployment_event()).unwrap();
    assert!(key.as_str().ends_with('#'));
    assert_eq!(key.segment_count(), 6);
}

#[test]
fn round_trips_negative_segments() {
    let tuple = vec![Segment::from("a"), Segment::Int(-2), Segment::Int(-10_020_001)];
    let key = encode(&tuple).unwrap();
    assert_eq!(key.decode().unwrap(), tuple);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn decode_reports_index_and_token() {
    let key =
        "[S]app#[S]uuid#[S]deployments#[W]0000000000000001#[S]events#[P]0000000010000000#";
    let err = decode(key).unwrap_err();
    assert!(err.is_invalid_format());
    let ctx = err.context.unwrap();
    assert_eq!(ctx.index, 3);
    assert_eq!(ctx.token, "[W]0000000000000001");
}

#[test]
fn encode_reports_index_and_value() {
    let err = key!("app", "ok", "not#ok").unwrap_err();
    assert!(err.is_invalid_value());
    assert_eq!(err.index(), Some(2));
    assert!(err.to_string().contains("not#ok"));
}

#[test]
fn parse_validates_whole_key() {
    assert_eq!(
        Key::parse(DEPLOYMENT_EVENT).unwrap(),
        encode(&deployment_event()).unwrap()
    );
    assert!(Key::parse("[S]app#[P]1#").is_err());
    assert!(Key::try_from("[S]app").is_err());
}

#[test]
fn builder_matches_encode() {
    let mut builder = KeyBuilder::new();
    for segment in deployment_event() {
        builder.push(&segment).unwrap();
    }
    assert_eq!(builder.len(), 6);
    assert_eq!(builder.build(), DEPLOYMENT_EVENT);
}
