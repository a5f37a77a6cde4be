// File: crates/gauge-core/src/config.rs
// Summary: Immutable gauge configuration (sizes, colors, texts, flags) with density-aware defaults.

use crate::color::Color;
use crate::types::Density;

/// Style of one gauge. Sizes are in pixels; `with_density` derives them
/// from the dp/sp defaults. Replace the whole value to restyle a gauge.
#[derive(Clone, Debug, PartialEq)]
pub struct GaugeConfig {
    /// Lower bound of the reported range. Not used for layout.
    pub min: f32,
    /// Upper bound; the default bands are derived from it.
    pub max: f32,

    pub axis_line_width: f32,

    pub tick_offset: f32,
    pub axis_tick_length: f32,
    pub axis_tick_width: f32,
    pub split_line_length: f32,
    pub split_line_width: f32,

    pub pointer_length: f32,
    pub pointer_width: f32,
    pub pointer_offset: f32,
    pub pointer_color: Color,

    pub title: String,
    pub title_size: f32,
    pub title_color: Color,
    pub title_offset: f32,

    pub detail_size: f32,
    pub detail_color: Color,
    /// Initial reading.
    pub data_value: f32,
    pub data_unit: String,
    pub data_unit_size: f32,
    pub data_unit_color: Color,

    pub ext_btn_offset: f32,
    pub ext_btn_round: bool,
    pub ext_btn_round_radius: f32,
    pub ext_btn_height: f32,
    pub ext_btn_width: f32,
    pub ext_btn_background: Color,
    pub ext_btn_text: String,
    pub ext_btn_text_size: f32,
    pub ext_btn_text_color: Color,

    /// Color pointer, readout and button after the active band.
    pub enable_auto_color: bool,
    /// Reveal pointer and readout with an animation on attach/update.
    pub enable_animator: bool,
}

impl GaugeConfig {
    pub fn with_density(d: Density) -> Self {
        Self {
            min: 0.0,
            max: 1.0,

            axis_line_width: d.dp(4.0),

            tick_offset: d.dp(2.0),
            axis_tick_length: d.dp(4.0),
            axis_tick_width: d.dp(1.0),
            split_line_length: d.dp(10.0),
            split_line_width: d.dp(3.0),

            pointer_length: d.dp(24.0),
            pointer_width: d.dp(16.0),
            pointer_offset: d.dp(8.0),
            pointer_color: Color::GOOD,

            title: "PM2.5".to_string(),
            title_size: d.sp(12.0),
            title_color: Color::WHITE,
            title_offset: d.dp(4.0),

            detail_size: d.sp(16.0),
            detail_color: Color::GOOD,
            data_value: 0.5,
            data_unit: "µg/m³".to_string(),
            data_unit_size: d.sp(12.0),
            data_unit_color: Color::GOOD,

            ext_btn_offset: d.dp(4.0),
            ext_btn_round: true,
            ext_btn_round_radius: d.dp(4.0),
            ext_btn_height: d.dp(24.0),
            ext_btn_width: d.dp(64.0),
            ext_btn_background: Color::GOOD,
            ext_btn_text: "good".to_string(),
            ext_btn_text_size: d.sp(12.0),
            ext_btn_text_color: Color::BUTTON_TEXT,

            enable_auto_color: false,
            enable_animator: false,
        }
    }
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self::with_density(Density::default())
    }
}
