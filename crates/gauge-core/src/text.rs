// File: crates/gauge-core/src/text.rs
// Summary: Font metrics abstraction used for text centering, plus a deterministic approximation.

/// Vertical font metrics relative to the baseline (y grows downward,
/// so `top` and `ascent` are negative).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FontMetrics {
    pub top: f32,
    pub ascent: f32,
    pub descent: f32,
    pub bottom: f32,
}

impl FontMetrics {
    /// Full line box height.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Baseline offset below a vertical center line.
    pub fn center_baseline(&self) -> f32 {
        self.height() / 2.0 - self.bottom
    }
}

/// Text measurement supplied by the rendering backend.
pub trait TextMetrics {
    fn font_metrics(&self, size: f32) -> FontMetrics;
    fn measure(&self, text: &str, size: f32) -> f32;
}

/// Proportional metrics of a typical sans-serif face; no font files needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxMetrics {
    pub top: f32,
    pub ascent: f32,
    pub descent: f32,
    pub bottom: f32,
    /// Average advance per character, in ems.
    pub advance: f32,
}

impl Default for ApproxMetrics {
    fn default() -> Self {
        Self { top: -1.056, ascent: -0.928, descent: 0.244, bottom: 0.271, advance: 0.55 }
    }
}

impl TextMetrics for ApproxMetrics {
    fn font_metrics(&self, size: f32) -> FontMetrics {
        FontMetrics {
            top: self.top * size,
            ascent: self.ascent * size,
            descent: self.descent * size,
            bottom: self.bottom * size,
        }
    }

    fn measure(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * self.advance * size
    }
}
