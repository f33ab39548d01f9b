use ripple_pond::config::AggregationMode;
use ripple_pond::field::{self, FieldParams, FieldSample};
use ripple_pond::ripples::RippleEvent;

fn ripple(x: f32, y: f32, spawn_time: f32) -> RippleEvent {
    RippleEvent { x, y, spawn_time }
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

// ── Decay ───────────────────────────────────────────────────────────────────

#[test]
fn decayed_ripples_fold_to_exactly_zero() {
    let params = FieldParams::default();
    let events = [ripple(0.3, 0.3, 0.0)];

    // decay_rate 2.0 means the ripple is inert from age 0.5 s on.
    for now in [0.5, 0.75, 3.0, 100.0] {
        let active = field::activate(&events, now, &params);
        assert!(active.is_empty());
        let sample = field::evaluate(0.3, 0.3, now, &active, &params);
        assert_eq!(sample, FieldSample::default());
    }
}

#[test]
fn fresh_ripples_do_contribute() {
    let params = FieldParams::default();
    let events = [ripple(0.3, 0.3, 0.0)];
    let active = field::activate(&events, 0.1, &params);
    assert_eq!(active.len(), 1);
    let sample = field::evaluate(0.7, 0.6, 0.1, &active, &params);
    assert!(sample != FieldSample::default());
}

// ── Degeneracy at the wave center ───────────────────────────────────────────

#[test]
fn pixel_at_ripple_center_stays_finite() {
    let params = FieldParams::default();
    let events = [ripple(0.5, 0.5, 0.0)];
    let active = field::activate(&events, 0.0, &params);
    let sample = field::evaluate(0.5, 0.5, 0.0, &active, &params);

    assert!(sample.du.is_finite());
    assert!(sample.dv.is_finite());
    assert!(sample.dc.is_finite());
    // Brightness at the center is bounded by the configured amplitude.
    assert!(sample.dc.abs() <= params.brightness_amp + 1e-6);
}

// ── Superposition ───────────────────────────────────────────────────────────

#[test]
fn coincident_ripples_superpose_additively() {
    let params = FieldParams::default();
    let one = [ripple(0.4, 0.6, 0.05)];
    let two = [ripple(0.4, 0.6, 0.05), ripple(0.4, 0.6, 0.05)];
    let now = 0.2;

    let single = field::evaluate(0.7, 0.3, now, &field::activate(&one, now, &params), &params);
    let double = field::evaluate(0.7, 0.3, now, &field::activate(&two, now, &params), &params);

    assert!(close(double.du, 2.0 * single.du));
    assert!(close(double.dv, 2.0 * single.dv));
    assert!(close(double.dc, 2.0 * single.dc));
}

#[test]
fn all_mode_is_linear_in_the_log() {
    let params = FieldParams::default();
    let events = [
        ripple(0.2, 0.8, 0.00),
        ripple(0.5, 0.5, 0.10),
        ripple(0.9, 0.1, 0.15),
    ];
    let now = 0.3;
    let (u, v) = (0.55, 0.45);

    let combined = field::evaluate(u, v, now, &field::activate(&events, now, &params), &params);

    let mut du = 0.0;
    let mut dv = 0.0;
    let mut dc = 0.0;
    for e in events {
        let s = field::evaluate(u, v, now, &field::activate(&[e], now, &params), &params);
        du += s.du;
        dv += s.dv;
        dc += s.dc;
    }

    assert!(close(combined.du, du));
    assert!(close(combined.dv, dv));
    assert!(close(combined.dc, dc));
}

// ── Latest-only aggregation ─────────────────────────────────────────────────

#[test]
fn latest_mode_uses_only_the_newest_spawn() {
    let params = FieldParams {
        mode: AggregationMode::Latest,
        ..FieldParams::default()
    };
    let older = ripple(0.2, 0.2, 0.00);
    let newer = ripple(0.8, 0.8, 0.05);
    let now = 0.1;

    let both = field::evaluate(
        0.4,
        0.6,
        now,
        &field::activate(&[older, newer], now, &params),
        &params,
    );
    let only_newer = field::evaluate(
        0.4,
        0.6,
        now,
        &field::activate(&[newer], now, &params),
        &params,
    );

    // The older spawn still occupies a log slot but folds into nothing.
    assert_eq!(both, only_newer);
}

#[test]
fn latest_mode_keeps_an_ambient_swell_without_spawns() {
    let params = FieldParams {
        mode: AggregationMode::Latest,
        ..FieldParams::default()
    };
    let active = field::activate(&[], 0.3, &params);
    assert!(active.is_empty());

    let sample = field::evaluate(0.8, 0.5, 0.3, &active, &params);
    assert!(sample != FieldSample::default());
    assert!(sample.du.is_finite() && sample.dv.is_finite() && sample.dc.is_finite());
}

#[test]
fn all_mode_with_an_empty_log_is_flat() {
    let params = FieldParams::default();
    let active = field::activate(&[], 5.0, &params);
    let sample = field::evaluate(0.25, 0.75, 5.0, &active, &params);
    assert_eq!(sample, FieldSample::default());
}
