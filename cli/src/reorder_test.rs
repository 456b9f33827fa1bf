use super::*;
use wire::Status;

fn args(ids: &[&str]) -> ReorderArgs {
    ReorderArgs {
        path: "/work_status/reorder".to_owned(),
        status: Status::Recurring,
        ids: ids.iter().map(|id| (*id).to_owned()).collect(),
        dry_run: true,
    }
}

#[test]
fn batch_positions_follow_argument_order() {
    let batch = build_batch(&args(&["c", "a", "b"])).expect("non-empty");
    let ids: Vec<&str> = batch.ids().collect();
    assert_eq!(ids, ["c", "a", "b"]);
    let positions: Vec<usize> = batch.positions.iter().map(|p| p.position).collect();
    assert_eq!(positions, [0, 1, 2]);
    assert!(batch.positions.iter().all(|p| p.status == Status::Recurring));
}

#[test]
fn empty_id_list_is_rejected() {
    assert!(matches!(build_batch(&args(&[])), Err(CliError::EmptyBatch)));
}
