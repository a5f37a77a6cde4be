// File: crates/gauge-core/tests/format.rs
// Purpose: Default readout formatting (`#.##` pattern).

use gauge_core::format::format_decimals;
use gauge_core::{format_default, ValueFormatter};

#[test]
fn default_pattern() {
    assert_eq!(format_default(0.5), "0.5");
    assert_eq!(format_default(1.0 / 3.0), "0.33");
    assert_eq!(format_default(2.0 / 3.0), "0.67");
    assert_eq!(format_default(1.0), "1");
    assert_eq!(format_default(0.0), "0");
    assert_eq!(format_default(12.345_6), "12.35");
    assert_eq!(format_default(-0.25), "-0.25");
    assert_eq!(format_default(-0.001), "0");
    assert_eq!(format_default(150.0), "150");
}

#[test]
fn other_precisions() {
    assert_eq!(format_decimals(3.14159, 0), "3");
    assert_eq!(format_decimals(3.10, 3), "3.1");
}

#[test]
fn formatter_wraps_closures() {
    let f = ValueFormatter::new(|v| format!("{v:.1} ppm"));
    assert_eq!(f.format(4.0), "4.0 ppm");
    assert_eq!(ValueFormatter::default().format(0.5), "0.5");
}
