use super::*;

#[test]
fn progress_max_is_absent_until_total_known() {
    assert_eq!(progress_max(Progress { value: 3, max: None }), None);
    assert_eq!(progress_max(Progress { value: 3, max: Some(10) }), Some("10".to_owned()));
}

#[test]
fn progress_label_shows_unknown_total() {
    assert_eq!(progress_label(Progress::default()), "0 / ?");
    assert_eq!(progress_label(Progress { value: 7, max: Some(9) }), "7 / 9");
}

#[test]
fn progress_value_is_cumulative_count() {
    assert_eq!(progress_value(Progress { value: 42, max: None }), "42");
}

#[test]
fn error_lines_render_red() {
    assert_eq!(line_style(LineKind::Error), "color: red");
    assert_eq!(line_style(LineKind::Info), "");
}
