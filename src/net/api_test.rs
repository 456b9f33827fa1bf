use super::*;
use wire::Status;

#[test]
fn any_2xx_status_is_success() {
    assert_eq!(status_outcome(200), Ok(()));
    assert_eq!(status_outcome(204), Ok(()));
    assert_eq!(status_outcome(299), Ok(()));
}

#[test]
fn other_statuses_are_errors() {
    assert_eq!(status_outcome(302), Err(PersistError::Status(302)));
    assert_eq!(status_outcome(422), Err(PersistError::Status(422)));
    assert_eq!(status_outcome(500), Err(PersistError::Status(500)));
}

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(PersistError::Status(500).to_string(), "reorder rejected with status 500");
    assert_eq!(
        PersistError::Transport("offline".to_owned()).to_string(),
        "reorder request failed: offline"
    );
}

#[test]
fn describe_batch_counts_cards_in_zone() {
    let batch = ReorderRequest::from_order(Status::Started, ["a", "b", "c"]);
    assert_eq!(describe_batch(&batch), "3 card(s) in started");
    assert_eq!(describe_batch(&ReorderRequest::default()), "empty batch");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_outside_browser_reports_transport_error() {
    let batch = ReorderRequest::from_order(Status::Done, ["a"]);
    let outcome = futures::executor::block_on(submit_reorder("/work_status/reorder", &batch));
    assert!(matches!(outcome, Err(PersistError::Transport(_))));
}
