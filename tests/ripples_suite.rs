use ripple_pond::ripples::{RippleEvent, RippleLog};

/// Build a distinguishable event; spawn times increase with the index.
fn event(i: usize) -> RippleEvent {
    RippleEvent {
        x: (i % 10) as f32 / 10.0,
        y: (i % 7) as f32 / 7.0,
        spawn_time: i as f32 * 0.01,
    }
}

#[test]
fn capacity_is_never_exceeded() {
    let mut log = RippleLog::new(50);
    for i in 0..137 {
        log.append(event(i));
        assert!(log.len() <= 50);
    }
    assert_eq!(log.len(), 50);
    assert_eq!(log.capacity(), 50);
}

#[test]
fn overflow_evicts_the_oldest_first() {
    let mut log = RippleLog::new(3);
    for i in 0..5 {
        log.append(event(i));
    }
    let snap = log.snapshot();
    assert_eq!(snap.len(), 3);
    assert_eq!(snap[0], event(2));
    assert_eq!(snap[1], event(3));
    assert_eq!(snap[2], event(4));
}

#[test]
fn fifty_one_appends_keep_the_most_recent_fifty() {
    let mut log = RippleLog::new(50);
    for i in 0..51 {
        log.append(event(i));
    }
    assert_eq!(log.len(), 50);
    let snap = log.snapshot();
    // The very first append is gone; everything else survives in order.
    assert!(!snap.contains(&event(0)));
    assert_eq!(snap[0], event(1));
    assert_eq!(snap[49], event(50));
}

#[test]
fn snapshot_is_in_spawn_order() {
    let mut log = RippleLog::new(10);
    for i in 0..25 {
        log.append(event(i));
    }
    let snap = log.snapshot();
    for pair in snap.windows(2) {
        assert!(pair[0].spawn_time <= pair[1].spawn_time);
    }
}

#[test]
fn latest_tracks_the_last_append() {
    let mut log = RippleLog::new(4);
    assert!(log.latest().is_none());
    for i in 0..9 {
        log.append(event(i));
        assert_eq!(log.latest(), Some(event(i)));
    }
}

#[test]
fn clear_empties_the_log() {
    let mut log = RippleLog::new(8);
    for i in 0..8 {
        log.append(event(i));
    }
    log.clear();
    assert!(log.is_empty());
    assert_eq!(log.snapshot().len(), 0);
    // Appends after a clear start fresh.
    log.append(event(42));
    assert_eq!(log.len(), 1);
}
