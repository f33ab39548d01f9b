use ripple_pond::interact::PointerTracker;
use ripple_pond::ripples::RippleLog;

#[test]
fn press_spawns_once_and_holding_still_adds_nothing() {
    let mut log = RippleLog::new(50);
    let mut tracker = PointerTracker::new(200, 100, 0.0);

    tracker.sample(true, Some((100.0, 50.0)), 0.0, &mut log);
    assert_eq!(log.len(), 1);

    // Same position while held: no motion, no new ripple.
    for frame in 1..10 {
        tracker.sample(true, Some((100.0, 50.0)), frame as f32 / 60.0, &mut log);
    }
    assert_eq!(log.len(), 1);
}

#[test]
fn press_normalizes_into_unit_coordinates() {
    let mut log = RippleLog::new(50);
    let mut tracker = PointerTracker::new(200, 100, 0.0);

    tracker.sample(true, Some((100.0, 50.0)), 0.25, &mut log);
    let event = log.latest().unwrap();
    assert!((event.x - 0.5).abs() < 1e-6);
    assert!((event.y - 0.5).abs() < 1e-6);
    assert!((event.spawn_time - 0.25).abs() < 1e-6);
}

#[test]
fn unthrottled_drag_lands_every_moved_sample() {
    let mut log = RippleLog::new(50);
    let mut tracker = PointerTracker::new(200, 100, 0.0);

    tracker.sample(true, Some((10.0, 10.0)), 0.00, &mut log);
    tracker.sample(true, Some((11.0, 10.0)), 0.02, &mut log);
    tracker.sample(true, Some((11.5, 10.5)), 0.04, &mut log);
    assert_eq!(log.len(), 3);
}

#[test]
fn drag_threshold_thins_the_trail() {
    let mut log = RippleLog::new(50);
    let mut tracker = PointerTracker::new(640, 480, 20.0);

    tracker.sample(true, Some((100.0, 100.0)), 0.00, &mut log);
    assert_eq!(log.len(), 1);

    // 10 px of travel: under the threshold, dropped.
    tracker.sample(true, Some((110.0, 100.0)), 0.02, &mut log);
    assert_eq!(log.len(), 1);

    // 25 px from the last *accepted* sample: spawns.
    tracker.sample(true, Some((125.0, 100.0)), 0.04, &mut log);
    assert_eq!(log.len(), 2);
}

#[test]
fn off_window_coordinates_clamp_before_normalizing() {
    let mut log = RippleLog::new(50);
    let mut tracker = PointerTracker::new(200, 100, 0.0);

    tracker.sample(true, Some((900.0, -50.0)), 0.0, &mut log);
    let event = log.latest().unwrap();
    assert!(event.x >= 0.0 && event.x <= 1.0);
    assert!(event.y >= 0.0 && event.y <= 1.0);
    assert!((event.x - 199.0 / 200.0).abs() < 1e-6);
    assert!((event.y - 0.0).abs() < 1e-6);
}

#[test]
fn release_and_press_spawns_again() {
    let mut log = RippleLog::new(50);
    let mut tracker = PointerTracker::new(200, 100, 0.0);

    tracker.sample(true, Some((50.0, 50.0)), 0.0, &mut log);
    tracker.sample(false, Some((50.0, 50.0)), 0.1, &mut log);
    tracker.sample(true, Some((50.0, 50.0)), 0.2, &mut log);
    assert_eq!(log.len(), 2);
}
