//! Integration tests for prefix scans

use std::collections::BTreeMap;

use sortkey_codec::{Key, filter_prefixed, key, prefix_range};

fn store() -> BTreeMap<String, &'static str> {
    [
        (key!("app", "uuid", "deployments", 1).unwrap(), "deployment 1"),
        (key!("app", "uuid", "deployments", 1, "events", 10_000_000).unwrap(), "event a"),
        (key!("app", "uuid", "deployments", 1, "events", 10_000_001).unwrap(), "event b"),
        (key!("app", "uuid", "deployments", 1, "lock").unwrap(), "lock"),
        (key!("app", "uuid", "deployments", 2).unwrap(), "deployment 2"),
        (key!("app", "uuid", "deployments", 2, "events", 10_000_000).unwrap(), "event c"),
        (key!("app", "uuids").unwrap(), "lookalike"),
    ]
    .into_iter()
    .map(|(key, value)| (key.into_string(), value))
    .collect()
}

#[test]
fn prefix_of_longer_tuple() {
    let prefix = key!("app", "uuid", "deployments", 1).unwrap();
    let child = key!("app", "uuid", "deployments", 1, "events", 10_000_000).unwrap();
    assert!(child.starts_with(&prefix));

    let other = key!("app", "uuid", "deployments", 2, "events", 10_000_000).unwrap();
    assert!(!other.starts_with(&key!("app", "uuid", "deployments", 1, "events").unwrap()));
}

#[test]
fn range_scan_returns_subtree() {
    let store = store();
    let prefix = key!("app", "uuid", "deployments", 1).unwrap();
    let values: Vec<_> = store
        .range::<str, _>(prefix_range(&prefix))
        .map(|(_, value)| *value)
        .collect();
    assert_eq!(values, vec!["deployment 1", "event a", "event b", "lock"]);
}

#[test]
fn range_scan_excludes_lookalike_text() {
    let store = store();
    let prefix = key!("app", "uuid").unwrap();
    let values: Vec<_> = store
        .range::<str, _>(prefix_range(&prefix))
        .map(|(_, value)| *value)
        .collect();
    assert_eq!(values.len(), 6);
    assert!(!values.contains(&"lookalike"));
}

#[test]
fn filter_agrees_with_range() {
    let store = store();
    let prefix = key!("app", "uuid", "deployments", 1, "events").unwrap();
    let filtered: Vec<&str> = filter_prefixed(store.keys().map(String::as_str), &prefix).collect();
    let ranged: Vec<&str> = store
        .range::<str, _>(prefix_range(&prefix))
        .map(|(key, _)| key.as_str())
        .collect();
    assert_eq!(filtered, ranged);
    assert_eq!(filtered.len(), 2);
}

#[test]
fn empty_prefix_selects_everything() {
    let store = store();
    let count = store.range::<str, _>(prefix_range(&Key::empty())).count();
    assert_eq!(count, store.len());
}
