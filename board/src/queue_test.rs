use super::*;
use wire::Status;

fn batch(status: Status, ids: &[&str]) -> ReorderRequest {
    ReorderRequest::from_order(status, ids.iter().copied())
}

#[test]
fn first_batch_goes_out_immediately() {
    let mut queue = PersistQueue::new();
    let sent = queue.enqueue(batch(Status::Done, &["a"]));
    assert_eq!(sent, Some(batch(Status::Done, &["a"])));
    assert!(queue.is_busy());
}

#[test]
fn later_batches_wait_for_completion_in_order() {
    let mut queue = PersistQueue::new();
    queue.enqueue(batch(Status::Done, &["a"]));
    assert_eq!(queue.enqueue(batch(Status::Started, &["b"])), None);
    assert_eq!(queue.enqueue(batch(Status::Recurring, &["c"])), None);

    assert_eq!(queue.complete(), Some(batch(Status::Started, &["b"])));
    assert_eq!(queue.complete(), Some(batch(Status::Recurring, &["c"])));
    assert_eq!(queue.complete(), None);
    assert!(!queue.is_busy());
}

#[test]
fn newer_snapshot_of_same_zone_replaces_unsent_one_and_moves_back() {
    let mut queue = PersistQueue::new();
    queue.enqueue(batch(Status::Done, &["x"]));
    queue.enqueue(batch(Status::Started, &["a", "b"]));
    queue.enqueue(batch(Status::WorkingOn, &["c"]));
    queue.enqueue(batch(Status::Started, &["b", "a", "d"]));
    assert_eq!(queue.pending_len(), 2);

    assert_eq!(queue.complete(), Some(batch(Status::WorkingOn, &["c"])));
    assert_eq!(queue.complete(), Some(batch(Status::Started, &["b", "a", "d"])));
}

#[test]
fn rapid_cross_zone_moves_settle_on_latest_placement() {
    // Card "k" goes Done -> Started -> Done while the first submission is in flight.
    let mut queue = PersistQueue::new();
    let mut server: std::collections::HashMap<String, (Status, usize)> = std::collections::HashMap::new();
    let mut apply = |b: &ReorderRequest| {
        for entry in &b.positions {
            server.insert(entry.id.clone(), (entry.status, entry.position));
        }
    };

    let first = queue.enqueue(batch(Status::Started, &["k", "s1"])).expect("idle queue sends");
    queue.enqueue(batch(Status::Done, &["d1", "k"]));
    queue.enqueue(batch(Status::Started, &["s1"]));

    apply(&first);
    while let Some(next) = queue.complete() {
        apply(&next);
    }
    assert_eq!(server.get("k"), Some(&(Status::Done, 1)));
    assert_eq!(server.get("s1"), Some(&(Status::Started, 0)));
}

#[test]
fn idle_queue_after_drain_sends_next_immediately() {
    let mut queue = PersistQueue::new();
    queue.enqueue(batch(Status::Done, &["a"]));
    assert_eq!(queue.complete(), None);
    assert!(queue.enqueue(batch(Status::Done, &["a", "b"])).is_some());
}
