// File: crates/gauge-render-skia/src/text.rs
// Summary: Skia-backed font selection and text metrics for gauge layout.

use gauge_core::{FontMetrics, TextMetrics};
use skia_safe as skia;

const SANS_FAMILIES: &[&str] = &["Roboto", "Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"];

/// Resolve a sans-serif typeface, falling back to the platform default.
pub fn default_typeface() -> Option<skia::Typeface> {
    let mgr = skia::FontMgr::default();
    SANS_FAMILIES
        .iter()
        .find_map(|family| mgr.match_family_style(*family, skia::FontStyle::normal()))
        .or_else(|| mgr.legacy_make_typeface(None::<&str>, skia::FontStyle::normal()))
}

/// Measures text with the same font the renderer draws with.
#[derive(Clone)]
pub struct SkiaTextMetrics {
    font: skia::Font,
}

impl SkiaTextMetrics {
    pub fn new() -> Self {
        let font = match default_typeface() {
            Some(tf) => skia::Font::from_typeface(tf, 12.0),
            None => {
                log::warn!("no system typeface found; text metrics use skia's empty default font");
                skia::Font::default()
            }
        };
        Self { font }
    }

    /// Font at `size` (clamped to at least 1px).
    pub fn font(&self, size: f32) -> skia::Font {
        let mut f = self.font.clone();
        f.set_size(size.max(1.0));
        f
    }
}

impl Default for SkiaTextMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for SkiaTextMetrics {
    fn font_metrics(&self, size: f32) -> FontMetrics {
        let (_, m) = self.font(size).metrics();
        FontMetrics { top: m.top, ascent: m.ascent, descent: m.descent, bottom: m.bottom }
    }

    fn measure(&self, text: &str, size: f32) -> f32 {
        let (width, _) = self.font(size).measure_str(text, None);
        width
    }
}
