use super::*;

#[test]
fn zone_selector_matches_status_attribute() {
    assert_eq!(zone_selector(Status::WorkingOn), ".dropzone[data-status=\"working_on\"]");
    assert_eq!(zone_selector(Status::TodaysTodos), ".dropzone[data-status=\"todays_todos\"]");
}

#[test]
fn zone_status_parses_known_tags() {
    assert_eq!(zone_status(Some("recurring".to_owned())), Some(Status::Recurring));
    assert_eq!(zone_status(Some(" done ".to_owned())), Some(Status::Done));
}

#[test]
fn zone_status_rejects_missing_or_unknown() {
    assert_eq!(zone_status(None), None);
    assert_eq!(zone_status(Some("archived".to_owned())), None);
}

#[test]
fn card_selector_targets_card_class() {
    assert_eq!(card_selector(), ".draggable-item");
    assert!(!card_selector().contains(' '), "cards are matched anywhere on the page");
}
