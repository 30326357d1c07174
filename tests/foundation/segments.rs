//! Integration tests for Segment and SegmentKind
//!
//! Tests construction, accessors, ordering, and tag parsing.

use sortkey_foundation::{Segment, SegmentKind};

// =============================================================================
// Segment Construction
// =============================================================================

#[test]
fn segment_from_integers() {
    assert_eq!(Segment::from(5i64), Segment::Int(5));
    assert_eq!(Segment::from(-5), Segment::Int(-5));
    assert_eq!(Segment::from(9_007_199_254_740_991), Segment::Int(9_007_199_254_740_991));
}

#[test]
fn segment_from_text() {
    let owned = Segment::from(String::from("events"));
    let borrowed = Segment::from("events");
    assert_eq!(owned, borrowed);
    assert_eq!(owned.as_text(), Some("events"));
    assert_eq!(owned.as_int(), None);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn tuples_order_lexicographically() {
    let shorter = vec![Segment::from("app"), Segment::Int(1)];
    let longer = vec![Segment::from("app"), Segment::Int(1), Segment::from("events")];
    let sibling = vec![Segment::from("app"), Segment::Int(2)];

    assert!(shorter < longer);
    assert!(longer < sibling);
}

#[test]
fn kinds_order_negative_positive_text() {
    let mut values = vec![
        Segment::from("a"),
        Segment::Int(1),
        Segment::Int(-1),
        Segment::Int(0),
    ];
    values.sort();
    assert_eq!(
        values,
        vec![
            Segment::Int(-1),
            Segment::Int(0),
            Segment::Int(1),
            Segment::from("a"),
        ]
    );
    let kinds: Vec<_> = values.iter().map(Segment::kind).collect();
    assert!(kinds.windows(2).all(|w| w[0] <= w[1]));
}

// =============================================================================
// Tags
// =============================================================================

#[test]
fn tags_are_three_bytes() {
    for kind in SegmentKind::ALL {
        assert_eq!(kind.tag().len(), SegmentKind::TAG_LEN);
        assert_eq!(SegmentKind::from_token(kind.tag()), Some(kind));
        assert_eq!(kind.to_string(), kind.tag());
    }
}

#[test]
fn only_number_tags_are_int() {
    assert!(SegmentKind::NegativeInt.is_int());
    assert!(SegmentKind::NonNegativeInt.is_int());
    assert!(!SegmentKind::Text.is_int());
}
