use super::*;

#[test]
fn maps_every_status_to_its_color() {
    let pairs = [
        (Status::Done, "success"),
        (Status::WorkingOn, "info"),
        (Status::Started, "warning"),
        (Status::TodaysTodos, "purple"),
        (Status::NotStarted, "secondary"),
        (Status::Recurring, "primary"),
    ];
    for (status, color) in pairs {
        assert_eq!(header_style(status).background, format!("bg-{color}"));
    }
}

#[test]
fn only_not_started_uses_dark_text() {
    for status in Status::ALL {
        let expected = if status == Status::NotStarted { "text-dark" } else { "text-white" };
        assert_eq!(header_style(status).text, expected);
    }
}

#[test]
fn every_applied_class_is_in_the_stale_list() {
    for status in Status::ALL {
        for class in header_style(status).classes() {
            assert!(STALE_HEADER_CLASSES.contains(&class), "{class} would never be removed");
        }
    }
}
