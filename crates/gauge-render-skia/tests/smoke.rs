// File: crates/gauge-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use gauge_core::{Gauge, Surface};
use gauge_render_skia::{render_to_png, render_to_png_bytes, RenderOptions, SkiaTextMetrics};

#[test]
fn render_smoke_png() {
    let gauge = Gauge::default();
    let list = gauge.render(&Surface::default(), &SkiaTextMetrics::new());

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    render_to_png(&list, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = render_to_png_bytes(&list, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn skia_metrics_are_usable_for_layout() {
    use gauge_core::TextMetrics;
    let m = SkiaTextMetrics::new();
    let fm = m.font_metrics(16.0);
    assert!(fm.top <= fm.bottom);
    assert!(m.measure("", 16.0).abs() < 1e-6);
}
