#![allow(clippy::float_cmp)]

use super::*;

fn surface() -> MemorySurface {
    MemorySurface::new()
        .with_zone(Status::NotStarted, &["a", "b"])
        .with_zone(Status::Done, &["c"])
}

#[test]
fn cards_stack_with_gaps() {
    let s = surface();
    let a = s.card_rect("a").expect("a laid out");
    let b = s.card_rect("b").expect("b laid out");
    assert_eq!(a.top, LIST_TOP);
    assert_eq!(b.top, LIST_TOP + CARD_HEIGHT + CARD_GAP);
    assert_eq!(s.card_rect("c").expect("c").left, COLUMN_WIDTH + COLUMN_PADDING);
}

#[test]
fn custom_heights_shift_following_cards() {
    let s = surface().with_card_height("a", 100.0);
    assert_eq!(s.card_rect("b").expect("b").top, LIST_TOP + 100.0 + CARD_GAP);
}

#[test]
fn hit_test_distinguishes_header_card_list_and_zone() {
    let s = surface();
    let none = MemoryNode::Card("none".to_owned());
    let a = s.card_rect("a").expect("a");
    assert_eq!(s.node_at(Point::new(a.left + 5.0, a.top + 5.0), &none), Some(MemoryNode::Header("a".to_owned())));
    assert_eq!(s.node_at(Point::new(a.left + 5.0, a.top + 40.0), &none), Some(MemoryNode::Card("a".to_owned())));
    assert_eq!(s.node_at(Point::new(a.left + 5.0, 900.0), &none), Some(MemoryNode::List(Status::NotStarted)));
    assert_eq!(s.node_at(Point::new(a.left + 5.0, 10.0), &none), Some(MemoryNode::Zone(Status::NotStarted)));
    assert_eq!(s.node_at(Point::new(5000.0, 100.0), &none), None);
}

#[test]
fn hidden_card_collapses_out_of_layout() {
    let s = surface();
    let a = s.card_rect("a").expect("a");
    let hidden = MemoryNode::Card("a".to_owned());
    // With "a" gone, "b" slides up into its slot.
    assert_eq!(s.node_at(Point::new(a.left + 5.0, a.top + 40.0), &hidden), Some(MemoryNode::Card("b".to_owned())));
}

#[test]
fn parents_chain_up_to_zone() {
    let s = surface();
    assert_eq!(s.parent(&MemoryNode::Header("c".to_owned())), Some(MemoryNode::Card("c".to_owned())));
    assert_eq!(s.parent(&MemoryNode::Card("c".to_owned())), Some(MemoryNode::List(Status::Done)));
    assert_eq!(s.parent(&MemoryNode::List(Status::Done)), Some(MemoryNode::Zone(Status::Done)));
    assert_eq!(s.parent(&MemoryNode::Zone(Status::Done)), None);
}

#[test]
fn insert_moves_between_zones() {
    let mut s = surface();
    s.insert(
        &MemoryNode::List(Status::Done),
        &MemoryNode::Card("a".to_owned()),
        &Placement::Before(MemoryNode::Card("c".to_owned())),
    );
    assert_eq!(s.order(Status::NotStarted), vec!["b"]);
    assert_eq!(s.order(Status::Done), vec!["a", "c"]);
}
