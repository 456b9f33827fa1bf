use super::*;

#[test]
fn error_tag_keeps_everything_after_first_tag() {
    let msg = decode_message("SYNC_ERROR:HTTP 500: upstream: timeout").expect("decode");
    assert_eq!(msg, SyncMessage::Failed("HTTP 500: upstream: timeout".to_owned()));
}

#[test]
fn error_tag_wins_over_everything_else() {
    let msg = decode_message("SYNC_ERROR:PROGRESS_TOTAL:5").expect("decode");
    assert_eq!(msg, SyncMessage::Failed("PROGRESS_TOTAL:5".to_owned()));
}

#[test]
fn total_and_step_parse_counts() {
    assert_eq!(decode_message("PROGRESS_TOTAL:42"), Ok(SyncMessage::Total(42)));
    assert_eq!(decode_message("PROGRESS_STEP: 3 "), Ok(SyncMessage::Step(3)));
}

#[test]
fn count_ignores_trailing_fields() {
    assert_eq!(decode_message("PROGRESS_STEP:2:projects"), Ok(SyncMessage::Step(2)));
}

#[test]
fn malformed_count_is_an_error() {
    let err = decode_message("PROGRESS_TOTAL:many").expect_err("not a number");
    assert_eq!(
        err,
        WireError::MalformedCount { tag: "PROGRESS_TOTAL", raw: "many".to_owned() }
    );
}

#[test]
fn negative_count_is_an_error() {
    assert!(decode_message("PROGRESS_STEP:-1").is_err());
}

#[test]
fn finished_requires_exact_line() {
    assert_eq!(decode_message("All done!"), Ok(SyncMessage::Finished));
    assert_eq!(
        decode_message("All done! (3 skipped)"),
        Ok(SyncMessage::Line("All done! (3 skipped)".to_owned()))
    );
}

#[test]
fn plain_lines_pass_through() {
    let msg = decode_message("Fetching project 7 of 12").expect("decode");
    assert_eq!(msg, SyncMessage::Line("Fetching project 7 of 12".to_owned()));
}

#[test]
fn empty_line_is_a_plain_line() {
    assert_eq!(decode_message(""), Ok(SyncMessage::Line(String::new())));
}
