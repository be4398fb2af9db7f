//! Integration tests for rinha-common crate.

use rinha_common::{BytePos, Location, Span, ensure_sufficient_stack};

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_is_empty() {
    let empty = Span::from_usize(5, 5);
    let non_empty = Span::from_usize(5, 10);
    assert!(empty.is_empty());
    assert!(!non_empty.is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_byte_pos_from_usize_saturates() {
    assert_eq!(BytePos::from(15usize), BytePos(15));
    assert_eq!(BytePos::from(u32::MAX as usize), BytePos(u32::MAX));
    assert_eq!(BytePos::from(u32::MAX as usize + 1), BytePos(u32::MAX));
}

#[test]
fn test_location_display() {
    let location = Location::new(Span::from_usize(12, 20), "fib.rinha");
    assert_eq!(location.to_string(), "fib.rinha:12..20");
    assert_eq!(location.span(), Span::from_usize(12, 20));
    assert_eq!(Location::default().to_string(), "<unknown>:0..0");
}

#[test]
fn test_location_from_json() {
    let location: Location =
        serde_json::from_str(r#"{ "start": 1, "end": 4, "filename": "a.rinha" }"#).unwrap();
    assert_eq!(location, Location::new(Span::from_usize(1, 4), "a.rinha"));
}

#[test]
fn test_location_rejects_negative_offsets() {
    let result: Result<Location, _> =
        serde_json::from_str(r#"{ "start": -1, "end": 4, "filename": "a.rinha" }"#);
    assert!(result.is_err());
}

#[test]
fn test_ensure_sufficient_stack_passes_value_through() {
    assert_eq!(ensure_sufficient_stack(|| "ok"), "ok");
}
