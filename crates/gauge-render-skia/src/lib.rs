// File: crates/gauge-render-skia/src/lib.rs
// Summary: Skia renderer crate; replays gauge display lists onto Skia canvases and raster surfaces.

pub mod raster;
pub mod text;

pub use raster::{render_to_png, render_to_png_bytes, render_to_rgba8, RenderOptions};
pub use text::SkiaTextMetrics;

use gauge_core::{Color, DisplayList, DrawCommand, Point, Rotation};
use skia_safe as skia;

pub struct SkiaRenderer {
    metrics: SkiaTextMetrics,
    draw_text: bool,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { metrics: SkiaTextMetrics::new(), draw_text: true }
    }

    /// Skip text commands (font-independent output for snapshots).
    pub fn with_text(mut self, draw_text: bool) -> Self {
        self.draw_text = draw_text;
        self
    }

    pub fn metrics(&self) -> &SkiaTextMetrics {
        &self.metrics
    }

    /// Paint every command in order onto `canvas`.
    pub fn paint(&self, canvas: &skia::Canvas, list: &DisplayList) {
        for cmd in list {
            match cmd {
                DrawCommand::Arc { oval, start_angle, sweep_angle, stroke, rotation, .. } => {
                    let mut paint = stroke_paint(stroke.color, stroke.width);
                    paint.set_stroke_cap(skia::paint::Cap::Butt);
                    let rect = skia::Rect::from_ltrb(oval.left, oval.top, oval.right, oval.bottom);
                    with_rotation(canvas, *rotation, |c| {
                        c.draw_arc(rect, *start_angle, *sweep_angle, false, &paint);
                    });
                }
                DrawCommand::Line { from, to, stroke, rotation, .. } => {
                    let paint = stroke_paint(stroke.color, stroke.width);
                    with_rotation(canvas, *rotation, |c| {
                        c.draw_line(sk_point(*from), sk_point(*to), &paint);
                    });
                }
                DrawCommand::Polygon { points, fill, rotation, .. } => {
                    let Some((first, rest)) = points.split_first() else { continue };
                    let mut path = skia::Path::new();
                    path.move_to(sk_point(*first));
                    for p in rest {
                        path.line_to(sk_point(*p));
                    }
                    path.close();
                    let paint = fill_paint(*fill);
                    with_rotation(canvas, *rotation, |c| {
                        c.draw_path(&path, &paint);
                    });
                }
                DrawCommand::Text { text, origin, size, color, .. } => {
                    if !self.draw_text {
                        continue;
                    }
                    let font = self.metrics.font(*size);
                    let paint = fill_paint(*color);
                    let (w, _) = font.measure_str(text, Some(&paint));
                    canvas.draw_str(text, (origin.x - w / 2.0, origin.y), &font, &paint);
                }
                DrawCommand::Rect { rect, fill, corner_radius, .. } => {
                    let paint = fill_paint(*fill);
                    let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
                    match corner_radius {
                        Some(radius) => {
                            canvas.draw_round_rect(r, *radius, *radius, &paint);
                        }
                        None => {
                            canvas.draw_rect(r, &paint);
                        }
                    }
                }
            }
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn sk_point(p: Point) -> skia::Point {
    skia::Point::new(p.x, p.y)
}

fn stroke_paint(color: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(sk_color(color));
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk_color(color));
    paint
}

fn with_rotation(canvas: &skia::Canvas, rotation: Option<Rotation>, draw: impl FnOnce(&skia::Canvas)) {
    match rotation {
        Some(r) => {
            canvas.save();
            canvas.rotate(r.degrees, Some(sk_point(r.pivot)));
            draw(canvas);
            canvas.restore();
        }
        None => draw(canvas),
    }
}
