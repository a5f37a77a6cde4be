// File: crates/gauge-core/tests/animation.rs
// Purpose: Easing curve and the cancellable reveal animator.

use std::time::{Duration, Instant};

use gauge_core::{accelerate_decelerate, Animator, REVEAL_DURATION};

#[test]
fn easing_endpoints_and_symmetry() {
    assert!(accelerate_decelerate(0.0).abs() < 1e-6);
    assert!((accelerate_decelerate(1.0) - 1.0).abs() < 1e-6);
    assert!((accelerate_decelerate(0.5) - 0.5).abs() < 1e-6);
    // slow start, slow end
    assert!(accelerate_decelerate(0.1) < 0.1);
    assert!(accelerate_decelerate(0.9) > 0.9);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = accelerate_decelerate(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn run_progresses_and_finishes() {
    let t0 = Instant::now();
    let mut a = Animator::default();
    assert_eq!(a.duration(), REVEAL_DURATION);
    assert!(a.sample(t0).is_none(), "idle animator produces nothing");

    a.start(t0);
    let first = a.sample(t0).expect("running");
    assert!(first.fraction.abs() < 1e-6);
    assert!(!first.finished);

    let mid = a.sample(t0 + Duration::from_millis(375)).expect("running");
    assert!((mid.fraction - 0.5).abs() < 1e-3);

    let last = a.sample(t0 + Duration::from_millis(800)).expect("final tick");
    assert_eq!(last.fraction, 1.0);
    assert!(last.finished);
    assert!(!a.is_running());
    assert!(a.sample(t0 + Duration::from_secs(2)).is_none());
}

#[test]
fn restart_replaces_previous_run() {
    let t0 = Instant::now();
    let mut a = Animator::new(Duration::from_millis(100));
    let g1 = a.start(t0);
    let _ = a.sample(t0 + Duration::from_millis(90));
    let g2 = a.start(t0 + Duration::from_millis(90));
    assert_ne!(g1, g2);
    assert_eq!(a.current(), Some(g2));

    // The new run starts over from zero.
    let t = a.sample(t0 + Duration::from_millis(90)).expect("running");
    assert!(t.fraction.abs() < 1e-6);
}

#[test]
fn cancel_stops_ticks() {
    let t0 = Instant::now();
    let mut a = Animator::default();
    a.start(t0);
    a.cancel();
    assert!(!a.is_running());
    assert!(a.sample(t0 + Duration::from_millis(10)).is_none());
}

#[test]
fn zero_duration_finishes_immediately() {
    let t0 = Instant::now();
    let mut a = Animator::new(Duration::ZERO);
    a.start(t0);
    let t = a.sample(t0).expect("one tick");
    assert!(t.finished);
    assert_eq!(t.fraction, 1.0);
}
