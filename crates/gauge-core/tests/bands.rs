// File: crates/gauge-core/tests/bands.rs
// Purpose: Band slicing of the half circle and active band selection.

use gauge_core::{active_band, default_axis_lines, AxisLine, BandLayout, Color};

#[test]
fn slices_partition_half_circle() {
    for n in 1..=12usize {
        let bands = BandLayout::with_count(n);
        let mut prev_end = 0.0f32;
        for i in 0..n {
            let (start, end) = bands.slice(i);
            assert!((start - prev_end).abs() < 1e-4, "gap before band {i} of {n}");
            assert!(end > start);
            prev_end = end;
        }
        assert!((prev_end - 180.0).abs() < 1e-3, "{n} bands end at {prev_end}");
    }
}

#[test]
fn empty_lines_fall_back_to_three_slices() {
    let bands = BandLayout::for_lines(&[]);
    assert_eq!(bands.count, 3);
    assert!((bands.per_angle - 60.0).abs() < 1e-6);
}

#[test]
fn default_lines_follow_max() {
    let lines = default_axis_lines(150.0);
    assert_eq!(lines.len(), 3);
    assert!((lines[0].threshold - 50.0).abs() < 1e-4);
    assert!((lines[1].threshold - 100.0).abs() < 1e-4);
    assert!((lines[2].threshold - 150.0).abs() < 1e-4);
    assert_eq!(lines[0].color, Color::GOOD);
    assert_eq!(lines[1].label, "fair");
    assert_eq!(lines[2].color, Color::POOR);
}

#[test]
fn active_band_is_first_threshold_at_or_above_value() {
    let lines = default_axis_lines(1.0);
    let bands = BandLayout::for_lines(&lines);

    let b = active_band(&lines, &bands, 0.5).expect("0.5 is in range");
    assert_eq!(b.index, 1);
    assert_eq!(b.line.label, "fair");
    assert_eq!(b.line.color, Color::FAIR);
    assert!((b.angle - 90.0).abs() < 1e-4);

    // Exactly on a threshold belongs to that band.
    let b = active_band(&lines, &bands, 1.0).expect("max is in range");
    assert_eq!(b.index, 2);

    // Below zero still matches the first band; nothing is clamped.
    let b = active_band(&lines, &bands, -5.0).expect("negative matches first");
    assert_eq!(b.index, 0);
    assert!((b.angle - 30.0).abs() < 1e-4);

    assert!(active_band(&lines, &bands, 1.5).is_none());
}

#[test]
fn active_band_respects_list_order_not_threshold_order() {
    let lines = vec![
        AxisLine::new(10.0, Color::POOR, "high"),
        AxisLine::new(5.0, Color::GOOD, "low"),
    ];
    let bands = BandLayout::for_lines(&lines);
    let b = active_band(&lines, &bands, 3.0).expect("matches");
    assert_eq!(b.index, 0);
    assert_eq!(b.line.label, "high");
}
