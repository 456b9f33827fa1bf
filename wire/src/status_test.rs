use super::*;

#[test]
fn parses_every_known_tag() {
    for status in Status::ALL {
        assert_eq!(status.as_str().parse::<Status>(), Ok(status));
    }
}

#[test]
fn parse_trims_surrounding_whitespace() {
    assert_eq!(" working_on\n".parse::<Status>(), Ok(Status::WorkingOn));
}

#[test]
fn parse_rejects_unknown_tag() {
    let err = "hidden".parse::<Status>().expect_err("hidden is not a zone status");
    assert_eq!(err, WireError::UnknownStatus("hidden".to_owned()));
}

#[test]
fn serde_uses_snake_case_tags() {
    let json = serde_json::to_string(&Status::TodaysTodos).expect("serialize");
    assert_eq!(json, "\"todays_todos\"");
    let back: Status = serde_json::from_str("\"not_started\"").expect("deserialize");
    assert_eq!(back, Status::NotStarted);
}

#[test]
fn display_matches_wire_tag() {
    assert_eq!(Status::Recurring.to_string(), "recurring");
}
