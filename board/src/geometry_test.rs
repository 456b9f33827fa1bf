#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn mid_y_is_halfway_down() {
    let rect = Rect::new(0.0, 100.0, 200.0, 60.0);
    assert_eq!(rect.mid_y(), 130.0);
    assert_eq!(rect.bottom(), 160.0);
}

#[test]
fn contains_is_half_open() {
    let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(rect.contains(Point::new(10.0, 10.0)));
    assert!(rect.contains(Point::new(29.9, 29.9)));
    assert!(!rect.contains(Point::new(30.0, 15.0)));
    assert!(!rect.contains(Point::new(15.0, 30.0)));
}

#[test]
fn offset_to_inverts_movement() {
    let first = Rect::new(0.0, 40.0, 100.0, 30.0);
    let last = Rect::new(0.0, 80.0, 100.0, 30.0);
    let offset = last.offset_to(&first);
    assert_eq!(offset, Offset { dx: 0.0, dy: -40.0 });
    assert!(!offset.is_zero());
}

#[test]
fn unchanged_rect_has_zero_offset() {
    let rect = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(rect.offset_to(&rect).is_zero());
}
