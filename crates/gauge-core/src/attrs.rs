// File: crates/gauge-core/src/attrs.rs
// Summary: Declarative attribute table: named style keys, typed parsing and setters onto GaugeConfig.

use crate::color::Color;
use crate::config::GaugeConfig;
use crate::error::{GaugeError, Result};
use crate::types::Density;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrKind {
    Float,
    /// Size with an optional `px`/`dp`/`dip`/`sp` suffix.
    Dimension,
    Color,
    Text,
    Bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Number(f32),
    Color(Color),
    Text(String),
    Bool(bool),
}

pub struct AttrSpec {
    pub name: &'static str,
    pub kind: AttrKind,
    apply: fn(&mut GaugeConfig, AttrValue),
}

impl AttrSpec {
    pub fn parse(&self, raw: &str, density: Density) -> Result<AttrValue> {
        let invalid = |reason: String| GaugeError::InvalidAttribute {
            key: self.name.to_string(),
            value: raw.to_string(),
            reason,
        };
        match self.kind {
            AttrKind::Float => raw
                .trim()
                .parse::<f32>()
                .map(AttrValue::Number)
                .map_err(|e| invalid(e.to_string())),
            AttrKind::Dimension => parse_dimension(raw, density)
                .map(AttrValue::Number)
                .map_err(|e| invalid(e.to_string())),
            AttrKind::Color => Color::parse(raw).map(AttrValue::Color).map_err(|e| invalid(e.to_string())),
            AttrKind::Text => Ok(AttrValue::Text(raw.to_string())),
            AttrKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(AttrValue::Bool(true)),
                "false" => Ok(AttrValue::Bool(false)),
                _ => Err(invalid("expected `true` or `false`".to_string())),
            },
        }
    }
}

macro_rules! attributes {
    (@set Float $c:ident $f:ident $v:ident) => { if let AttrValue::Number(x) = $v { $c.$f = x; } };
    (@set Dimension $c:ident $f:ident $v:ident) => { if let AttrValue::Number(x) = $v { $c.$f = x; } };
    (@set Color $c:ident $f:ident $v:ident) => { if let AttrValue::Color(x) = $v { $c.$f = x; } };
    (@set Text $c:ident $f:ident $v:ident) => { if let AttrValue::Text(x) = $v { $c.$f = x; } };
    (@set Bool $c:ident $f:ident $v:ident) => { if let AttrValue::Bool(x) = $v { $c.$f = x; } };
    ($( $name:literal => $kind:ident $field:ident ),* $(,)?) => {
        &[ $(
            AttrSpec {
                name: $name,
                kind: AttrKind::$kind,
                apply: |c: &mut GaugeConfig, v: AttrValue| { attributes!(@set $kind c $field v) },
            }
        ),* ]
    };
}

/// Every style attribute the gauge understands.
pub static ATTRIBUTES: &[AttrSpec] = attributes! {
    "min" => Float min,
    "max" => Float max,
    "axisLineWidth" => Dimension axis_line_width,
    "tickOffset" => Dimension tick_offset,
    "axisTickLength" => Dimension axis_tick_length,
    "axisTickWidth" => Dimension axis_tick_width,
    "splitLineLength" => Dimension split_line_length,
    "splitLineWidth" => Dimension split_line_width,
    "pointerLength" => Dimension pointer_length,
    "pointerWidth" => Dimension pointer_width,
    "pointerOffset" => Dimension pointer_offset,
    "pointerColor" => Color pointer_color,
    "title" => Text title,
    "titleSize" => Dimension title_size,
    "titleColor" => Color title_color,
    "titleOffset" => Dimension title_offset,
    "detailSize" => Dimension detail_size,
    "detailColor" => Color detail_color,
    "dataValue" => Float data_value,
    "dataUnit" => Text data_unit,
    "dataUnitSize" => Dimension data_unit_size,
    "dataUnitColor" => Color data_unit_color,
    "extBtnOffset" => Dimension ext_btn_offset,
    "extBtnRound" => Bool ext_btn_round,
    "extBtnRoundRadius" => Dimension ext_btn_round_radius,
    "extBtnHeight" => Dimension ext_btn_height,
    "extBtnWidth" => Dimension ext_btn_width,
    "extBtnBackground" => Color ext_btn_background,
    "extBtnText" => Text ext_btn_text,
    "extBtnTextSize" => Dimension ext_btn_text_size,
    "extBtnTextColor" => Color ext_btn_text_color,
    "enableAutoColor" => Bool enable_auto_color,
    "enableAnimator" => Bool enable_animator,
};

/// Look up an attribute by camelCase or snake_case name.
pub fn find(key: &str) -> Option<&'static AttrSpec> {
    let want = normalize(key);
    ATTRIBUTES.iter().find(|a| normalize(a.name) == want)
}

fn normalize(key: &str) -> String {
    key.trim().chars().filter(|c| *c != '_' && *c != '-').flat_map(char::to_lowercase).collect()
}

/// `12`, `12px`, `4dp`, `4dip` or `12sp` to pixels.
pub fn parse_dimension(raw: &str, density: Density) -> Result<f32> {
    let s = raw.trim().to_ascii_lowercase();
    let (num, scale) = if let Some(n) = s.strip_suffix("dip") {
        (n, density.dp)
    } else if let Some(n) = s.strip_suffix("dp") {
        (n, density.dp)
    } else if let Some(n) = s.strip_suffix("sp") {
        (n, density.sp)
    } else if let Some(n) = s.strip_suffix("px") {
        (n, 1.0)
    } else {
        (s.as_str(), 1.0)
    };
    num.trim()
        .parse::<f32>()
        .map(|v| v * scale)
        .map_err(|_| GaugeError::InvalidDimension(raw.to_string()))
}

impl GaugeConfig {
    /// Fold `(key, value)` pairs over the defaults for `density`.
    /// Unknown keys are skipped; malformed values are an error.
    pub fn from_attributes<'a, I>(attrs: I, density: Density) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = GaugeConfig::with_density(density);
        for (key, raw) in attrs {
            let Some(spec) = find(key) else {
                log::warn!("skipping unknown gauge attribute `{key}`");
                continue;
            };
            let value = spec.parse(raw, density)?;
            (spec.apply)(&mut config, value);
        }
        log::debug!("gauge config from attributes: max={} title={:?}", config.max, config.title);
        Ok(config)
    }
}
