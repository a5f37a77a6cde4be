// File: crates/gauge-core/tests/gauge.rs
// Purpose: Host-facing gauge operations (setters, updates, attach/detach, reveal ticks).

use std::time::{Duration, Instant};

use gauge_core::{Animator, ApproxMetrics, AxisLine, Color, Gauge, GaugeConfig, Part, Surface};

fn animated_config() -> GaugeConfig {
    GaugeConfig { enable_animator: true, ..GaugeConfig::default() }
}

#[test]
fn static_gauge_shows_full_value() {
    let mut g = Gauge::default();
    assert_eq!(g.state().animated_fraction, 1.0);
    assert_eq!(g.state().data_value, 0.5);
    assert_eq!(g.axis_lines().len(), 3);

    g.attach(Instant::now());
    assert!(g.is_attached());
    let list = g.render(&Surface::default(), &ApproxMetrics::default());
    assert_eq!(list.text_of(Part::Value), Some("0.5"));
}

#[test]
fn update_without_animation_marks_dirty() {
    let mut g = Gauge::default();
    assert!(g.take_dirty());
    assert!(!g.take_dirty());
    g.update_data_value(0.9, Instant::now());
    assert!(!g.is_animating());
    assert!(g.take_dirty());
    assert_eq!(g.state().data_value, 0.9);
}

#[test]
fn attach_with_animation_reveals_from_zero() {
    let t0 = Instant::now();
    let mut g = Gauge::new(animated_config());
    g.attach(t0);
    assert!(g.is_animating());
    assert_eq!(g.state().animated_fraction, 0.0);

    assert!(g.tick(t0 + Duration::from_millis(375)));
    let f = g.state().animated_fraction;
    assert!(f > 0.0 && f < 1.0);

    g.tick(t0 + Duration::from_millis(750));
    assert_eq!(g.state().animated_fraction, 1.0);
    assert!(!g.is_animating());
}

#[test]
fn update_restarts_reveal() {
    let t0 = Instant::now();
    let mut g = Gauge::new(animated_config());
    g.attach(t0);
    g.tick(t0 + Duration::from_millis(500));
    assert!(g.state().animated_fraction > 0.5);

    g.update_data_value(0.2, t0 + Duration::from_millis(500));
    assert_eq!(g.state().animated_fraction, 0.0);
    assert!(g.is_animating());
    g.tick(t0 + Duration::from_millis(2000));
    assert_eq!(g.state().animated_fraction, 1.0);
    assert_eq!(g.state().data_value, 0.2);
}

#[test]
fn detach_ends_running_reveal() {
    let t0 = Instant::now();
    let mut g = Gauge::new(animated_config());
    g.attach(t0);
    g.detach();
    assert!(!g.is_attached());
    assert!(!g.is_animating());
    assert_eq!(g.state().animated_fraction, 1.0);
    g.take_dirty();
    assert!(!g.tick(t0 + Duration::from_millis(100)), "no ticks after detach");
}

#[test]
fn cancel_keeps_current_fraction() {
    let t0 = Instant::now();
    let mut g = Gauge::new(animated_config());
    g.start_animation(t0);
    g.tick(t0 + Duration::from_millis(300));
    let f = g.state().animated_fraction;
    g.cancel_animation();
    g.tick(t0 + Duration::from_millis(700));
    assert_eq!(g.state().animated_fraction, f);
}

#[test]
fn axis_lines_and_formatter_are_replaced_wholesale() {
    let mut g = Gauge::default();
    g.set_axis_lines(vec![
        AxisLine::new(50.0, Color::GOOD, "low"),
        AxisLine::new(100.0, Color::POOR, "high"),
    ])
    .set_value_formatter(|v| format!("{v:.0} ppm"));
    g.update_data_value(75.0, Instant::now());
    g.set_config(GaugeConfig { enable_auto_color: true, ..GaugeConfig::default() });

    let list = g.render(&Surface::default(), &ApproxMetrics::default());
    assert_eq!(list.count(Part::BandArc), 2);
    assert_eq!(list.text_of(Part::Value), Some("75 ppm"));
    assert_eq!(list.text_of(Part::ButtonLabel), Some("high"));

    g.set_axis_lines(Vec::new());
    let list = g.render(&Surface::default(), &ApproxMetrics::default());
    assert_eq!(list.count(Part::BandArc), 0);
    assert_eq!(list.count(Part::Pointer), 1);
}

#[test]
fn custom_animator_drives_the_reveal() {
    let t0 = Instant::now();
    let mut g = Gauge::new(animated_config());
    g.attach(t0);
    assert!(g.is_animating());

    g.set_animator(Animator::with_easing(Duration::from_millis(100), |t| t));
    assert!(!g.is_animating());

    g.update_data_value(0.8, t0);
    assert!(g.tick(t0 + Duration::from_millis(50)));
    assert!((g.state().animated_fraction - 0.5).abs() < 1e-6);
    assert!(g.is_animating());

    g.tick(t0 + Duration::from_millis(100));
    assert_eq!(g.state().animated_fraction, 1.0);
    assert!(!g.is_animating());
}
