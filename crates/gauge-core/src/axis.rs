// File: crates/gauge-core/src/axis.rs
// Summary: Axis lines (colored bands), band slicing of the half circle, active band lookup.

use crate::color::Color;

/// Sweep of the whole gauge, in degrees.
pub const SWEEP: f32 = 180.0;
/// Slice count used for geometry when no axis lines are configured.
pub const FALLBACK_BANDS: usize = 3;
/// Ticks drawn inside each band; every fifth one is a split tick.
pub const TICKS_PER_BAND: usize = 10;

/// One band of the gauge: values up to `threshold` fall into it.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLine {
    pub threshold: f32,
    pub color: Color,
    pub label: String,
}

impl AxisLine {
    pub fn new(threshold: f32, color: Color, label: impl Into<String>) -> Self {
        Self { threshold, color, label: label.into() }
    }
}

/// Three bands at `max/3`, `2max/3` and `max`.
pub fn default_axis_lines(max: f32) -> Vec<AxisLine> {
    vec![
        AxisLine::new(max / 3.0, Color::GOOD, "good"),
        AxisLine::new(max * 2.0 / 3.0, Color::FAIR, "fair"),
        AxisLine::new(max, Color::POOR, "poor"),
    ]
}

/// Equal angular slicing of the half circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandLayout {
    pub count: usize,
    pub per_angle: f32,
}

impl BandLayout {
    /// Slices for `lines`; an empty list still lays out three slices.
    pub fn for_lines(lines: &[AxisLine]) -> Self {
        Self::with_count(lines.len())
    }

    pub fn with_count(n: usize) -> Self {
        let count = if n == 0 { FALLBACK_BANDS } else { n };
        Self { count, per_angle: SWEEP / count as f32 }
    }

    /// `[start, end)` of band `i`, in degrees from the rest position.
    pub fn slice(&self, i: usize) -> (f32, f32) {
        let start = self.per_angle * i as f32;
        (start, start + self.per_angle)
    }

    pub fn midpoint(&self, i: usize) -> f32 {
        self.per_angle * i as f32 + self.per_angle / 2.0
    }

    pub fn tick_angle(&self) -> f32 {
        self.per_angle / TICKS_PER_BAND as f32
    }
}

/// Band the current reading falls into.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveBand<'a> {
    pub index: usize,
    pub line: &'a AxisLine,
    /// Pointer resting angle: middle of the band's slice.
    pub angle: f32,
}

/// First band, in list order, whose threshold is `>= value`.
pub fn active_band<'a>(lines: &'a [AxisLine], layout: &BandLayout, value: f32) -> Option<ActiveBand<'a>> {
    lines
        .iter()
        .enumerate()
        .find(|(_, l)| l.threshold >= value)
        .map(|(index, line)| ActiveBand { index, line, angle: layout.midpoint(index) })
}
