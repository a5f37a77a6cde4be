// File: crates/gauge-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels on the band arcs.

use gauge_core::{ApproxMetrics, Color, Gauge, Insets, Surface};
use gauge_render_skia::{render_to_rgba8, RenderOptions};

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn close_to(got: [u8; 4], want: Color) -> bool {
    let d = |a: u8, b: u8| (a as i16 - b as i16).abs() <= 2;
    d(got[0], want.r) && d(got[1], want.g) && d(got[2], want.b) && got[3] == 255
}

#[test]
fn render_rgba8_buffer() {
    let gauge = Gauge::default();
    let list = gauge.render(&Surface::new(360, 240, Insets::uniform(8)), &ApproxMetrics::default());

    let opts = RenderOptions { draw_text: false, ..RenderOptions::default() };
    let (px, w, h, stride) = render_to_rgba8(&list, &opts).expect("rgba render");
    assert_eq!((w, h), (360, 240));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background in the top-left corner
    assert!(close_to(pixel(&px, stride, 0, 0), opts.background));
    // Left end of the arc belongs to the first band, the top to the second.
    assert!(close_to(pixel(&px, stride, 8, 200), Color::GOOD), "got {:?}", pixel(&px, stride, 8, 200));
    assert!(close_to(pixel(&px, stride, 180, 32), Color::FAIR), "got {:?}", pixel(&px, stride, 180, 32));
}
