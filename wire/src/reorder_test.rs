use super::*;

#[test]
fn from_order_assigns_dense_positions() {
    let batch = ReorderRequest::from_order(Status::Started, ["a", "b", "c"]);
    let positions = batch.positions.iter().map(|e| e.position).collect::<Vec<_>>();
    assert_eq!(positions, vec![0, 1, 2]);
    assert!(batch.positions.iter().all(|e| e.status == Status::Started));
    assert_eq!(batch.ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn serializes_to_endpoint_shape() {
    let batch = ReorderRequest::from_order(Status::WorkingOn, ["t-1".to_owned()]);
    let json = serde_json::to_value(&batch).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "positions": [{ "id": "t-1", "status": "working_on", "position": 0 }]
        })
    );
}

#[test]
fn status_comes_from_first_entry() {
    let batch = ReorderRequest::from_order(Status::Done, ["x"]);
    assert_eq!(batch.status(), Some(Status::Done));
}

#[test]
fn empty_batch_has_no_status() {
    let batch = ReorderRequest::from_order(Status::Done, Vec::<String>::new());
    assert!(batch.is_empty());
    assert_eq!(batch.status(), None);
}
