// File: crates/gauge-core/src/format.rs
// Summary: Readout formatting: the default `#.##` pattern and pluggable formatters.

use std::fmt;
use std::sync::Arc;

/// Maps a reading to its display string.
#[derive(Clone)]
pub struct ValueFormatter(Arc<dyn Fn(f32) -> String + Send + Sync>);

impl ValueFormatter {
    pub fn new(f: impl Fn(f32) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn format(&self, value: f32) -> String {
        (self.0)(value)
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(format_default)
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

/// At most two fraction digits, no trailing zeros: `0.5`, `0.33`, `1`.
pub fn format_default(value: f32) -> String {
    format_decimals(value, 2)
}

pub fn format_decimals(value: f32, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let mut s = format!("{:.*}", max_fraction_digits, value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
