// File: crates/gauge-core/src/layout.rs
// Summary: Pixel layout of the gauge derived from surface size, padding and config.

use crate::axis::BandLayout;
use crate::config::GaugeConfig;
use crate::geometry::{Point, RectF};
use crate::types::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaugeLayout {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    /// Horizontal center (whole pixels).
    pub cx: f32,
    /// Arc center line, just above the button.
    pub arc_y: f32,
    /// Arc radius. Negative when padding outgrows the surface.
    pub pure_size: f32,
    pub bands: BandLayout,
    /// Inner x of every tick before rotation.
    pub tick_x: f32,
    /// Outer tip x of the pointer before rotation.
    pub pointer_x: f32,
}

impl GaugeLayout {
    pub fn compute(surface: &Surface, config: &GaugeConfig, bands: BandLayout) -> Self {
        let width = surface.width as f32;
        let height = surface.height as f32;
        let padding = surface.padding();
        let cx = (surface.width / 2) as f32;
        let button_band = config.ext_btn_height + config.ext_btn_offset;

        let pure_size = (width / 2.0 - padding).min(height - padding * 2.0 - button_band);
        let arc_y = height - padding - button_band;

        let tick_x = padding + config.axis_line_width + config.tick_offset;
        let pointer_x = tick_x + config.split_line_length + config.pointer_offset;

        Self { width, height, padding, cx, arc_y, pure_size, bands, tick_x, pointer_x }
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.arc_y)
    }

    /// Square the band arcs are inscribed in.
    pub fn arc_oval(&self) -> RectF {
        RectF::around(self.center(), self.pure_size)
    }

    pub fn button_rect(&self, config: &GaugeConfig) -> RectF {
        let half = config.ext_btn_width / 2.0;
        let bottom = self.height - self.padding;
        RectF::from_ltrb(self.cx - half, bottom - config.ext_btn_height, self.cx + half, bottom)
    }
}
