// File: crates/gauge-core/src/render.rs
// Summary: Pure gauge drawing procedure producing a DisplayList (arcs, ticks, pointer, texts, button).

use crate::axis::{active_band, AxisLine, BandLayout, TICKS_PER_BAND};
use crate::color::Color;
use crate::command::{DisplayList, DrawCommand, Part, Stroke};
use crate::config::GaugeConfig;
use crate::format::ValueFormatter;
use crate::geometry::{Point, Rotation};
use crate::layout::GaugeLayout;
use crate::text::TextMetrics;
use crate::types::Surface;

/// Per-frame inputs that change without restyling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub data_value: f32,
    /// Reveal progress in `[0, 1]`.
    pub animated_fraction: f32,
}

impl RenderState {
    pub const fn new(data_value: f32, animated_fraction: f32) -> Self {
        Self { data_value, animated_fraction }
    }
}

/// Color, label and resting angle picked from the active band.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoStyle {
    pub color: Color,
    pub label: String,
    pub angle: f32,
}

impl AutoStyle {
    pub fn resolve(axis_lines: &[AxisLine], bands: &BandLayout, config: &GaugeConfig, value: f32) -> Self {
        match active_band(axis_lines, bands, value) {
            Some(b) => Self { color: b.line.color, label: b.line.label.clone(), angle: b.angle },
            None => Self { color: Color::WHITE, label: config.ext_btn_text.clone(), angle: 0.0 },
        }
    }
}

pub struct GaugeRenderer<'a> {
    metrics: &'a dyn TextMetrics,
    formatter: &'a ValueFormatter,
}

impl<'a> GaugeRenderer<'a> {
    pub fn new(metrics: &'a dyn TextMetrics, formatter: &'a ValueFormatter) -> Self {
        Self { metrics, formatter }
    }

    /// Draw one frame. Same inputs always yield the same list.
    pub fn render(
        &self,
        surface: &Surface,
        config: &GaugeConfig,
        axis_lines: &[AxisLine],
        state: RenderState,
    ) -> DisplayList {
        let bands = BandLayout::for_lines(axis_lines);
        let layout = GaugeLayout::compute(surface, config, bands);
        let auto = AutoStyle::resolve(axis_lines, &bands, config, state.data_value);
        let mut out = DisplayList::new(surface.width, surface.height);

        draw_band_arcs(&mut out, &layout, config, axis_lines);
        draw_ticks(&mut out, &layout, config, axis_lines);
        draw_pointer(&mut out, &layout, config, &auto, state.animated_fraction);
        let text_height = self.draw_readout(&mut out, &layout, config, &auto, state);
        draw_title(&mut out, &layout, config, text_height);
        self.draw_button(&mut out, &layout, config, &auto);

        log::debug!(
            "rendered gauge {}x{}: {} commands, value={} fraction={}",
            surface.width,
            surface.height,
            out.len(),
            state.data_value,
            state.animated_fraction
        );
        out
    }

    /// Value and unit side by side, jointly centered on `cx` and vertically
    /// centered on the arc line. Returns the taller line height.
    fn draw_readout(
        &self,
        out: &mut DisplayList,
        layout: &GaugeLayout,
        config: &GaugeConfig,
        auto: &AutoStyle,
        state: RenderState,
    ) -> f32 {
        let value_text = self.formatter.format(state.data_value * state.animated_fraction);

        let value_fm = self.metrics.font_metrics(config.detail_size);
        let value_w = self.metrics.measure(&value_text, config.detail_size);
        let unit_fm = self.metrics.font_metrics(config.data_unit_size);
        let unit_w = self.metrics.measure(&config.data_unit, config.data_unit_size);

        let baseline = value_fm.center_baseline().min(unit_fm.center_baseline());
        let total_w = value_w + unit_w;
        let y = layout.arc_y - baseline;

        let (value_color, unit_color) = if config.enable_auto_color {
            (auto.color, auto.color)
        } else {
            (config.detail_color, config.data_unit_color)
        };

        out.push(DrawCommand::Text {
            part: Part::Value,
            text: value_text,
            origin: Point::new(layout.cx - (total_w - value_w) / 2.0, y),
            size: config.detail_size,
            color: value_color,
        });
        out.push(DrawCommand::Text {
            part: Part::Unit,
            text: config.data_unit.clone(),
            origin: Point::new(layout.cx + (total_w - unit_w) / 2.0, y),
            size: config.data_unit_size,
            color: unit_color,
        });

        value_fm.height().max(unit_fm.height())
    }

    fn draw_button(&self, out: &mut DisplayList, layout: &GaugeLayout, config: &GaugeConfig, auto: &AutoStyle) {
        let rect = layout.button_rect(config);
        out.push(DrawCommand::Rect {
            part: Part::Button,
            rect,
            fill: if config.enable_auto_color { auto.color } else { config.ext_btn_background },
            corner_radius: config.ext_btn_round.then_some(config.ext_btn_round_radius),
        });

        let fm = self.metrics.font_metrics(config.ext_btn_text_size);
        let y = rect.bottom - config.ext_btn_height / 2.0 - fm.bottom / 2.0 - fm.top / 2.0;
        let label = if config.enable_auto_color { auto.label.clone() } else { config.ext_btn_text.clone() };
        out.push(DrawCommand::Text {
            part: Part::ButtonLabel,
            text: label,
            origin: Point::new(layout.cx, y),
            size: config.ext_btn_text_size,
            color: config.ext_btn_text_color,
        });
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_band_arcs(out: &mut DisplayList, layout: &GaugeLayout, config: &GaugeConfig, axis_lines: &[AxisLine]) {
    let oval = layout.arc_oval();
    for (i, line) in axis_lines.iter().enumerate() {
        let (start, _) = layout.bands.slice(i);
        out.push(DrawCommand::Arc {
            part: Part::BandArc,
            oval,
            start_angle: 180.0,
            sweep_angle: layout.bands.per_angle,
            stroke: Stroke { color: line.color, width: config.axis_line_width },
            rotation: Some(Rotation::new(start, layout.center())),
        });
    }
}

fn draw_ticks(out: &mut DisplayList, layout: &GaugeLayout, config: &GaugeConfig, axis_lines: &[AxisLine]) {
    let Some(first) = axis_lines.first() else { return };
    let y = layout.arc_y;
    let x = layout.tick_x;

    out.push(DrawCommand::Line {
        part: Part::LeadingTick,
        from: Point::new(x, y),
        to: Point::new(x + config.split_line_length, y),
        stroke: Stroke { color: first.color, width: config.split_line_width },
        rotation: None,
    });

    let tick_angle = layout.bands.tick_angle();
    for (i, line) in axis_lines.iter().enumerate() {
        let (band_start, _) = layout.bands.slice(i);
        for j in 1..=TICKS_PER_BAND {
            let (part, length, width) = if j % 5 == 0 {
                (Part::SplitTick, config.split_line_length, config.split_line_width)
            } else {
                (Part::MinorTick, config.axis_tick_length, config.axis_tick_width)
            };
            out.push(DrawCommand::Line {
                part,
                from: Point::new(x, y),
                to: Point::new(x + length, y),
                stroke: Stroke { color: line.color, width },
                rotation: Some(Rotation::new(band_start + tick_angle * j as f32, layout.center())),
            });
        }
    }
}

fn draw_pointer(out: &mut DisplayList, layout: &GaugeLayout, config: &GaugeConfig, auto: &AutoStyle, fraction: f32) {
    let x = layout.pointer_x;
    let y = layout.arc_y;
    let half = config.pointer_width / 2.0;
    out.push(DrawCommand::Polygon {
        part: Part::Pointer,
        points: vec![
            Point::new(x, y),
            Point::new(x + config.pointer_length, y + half),
            Point::new(x + config.pointer_length, y - half),
        ],
        fill: if config.enable_auto_color { auto.color } else { config.pointer_color },
        rotation: Some(Rotation::new(auto.angle * fraction, layout.center())),
    });
}

fn draw_title(out: &mut DisplayList, layout: &GaugeLayout, config: &GaugeConfig, readout_height: f32) {
    out.push(DrawCommand::Text {
        part: Part::Title,
        text: config.title.clone(),
        origin: Point::new(layout.cx, layout.arc_y - readout_height - config.title_offset),
        size: config.title_size,
        color: config.title_color,
    });
}
