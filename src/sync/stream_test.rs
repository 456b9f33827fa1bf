use super::*;

#[test]
fn container_is_shown_only_while_blocking() {
    assert_eq!(container_display(true), "block");
    assert_eq!(container_display(false), "none");
}
