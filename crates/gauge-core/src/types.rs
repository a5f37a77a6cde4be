// File: crates/gauge-core/src/types.rs
// Summary: Shared types and constants (surface size, paddings, density).

/// Default surface width in pixels.
pub const WIDTH: u32 = 360;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 240;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
    /// The gauge pads every edge by the largest of the four.
    pub fn max_edge(&self) -> u32 {
        self.left.max(self.right).max(self.top.max(self.bottom))
    }
}

/// Measured drawing area handed over by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl Surface {
    pub const fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self { width, height, insets }
    }
    pub fn padding(&self) -> f32 {
        self.insets.max_edge() as f32
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::uniform(8))
    }
}

/// Display density used to turn dp/sp sizes into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub dp: f32,
    pub sp: f32,
}

impl Density {
    pub const fn new(dp: f32, sp: f32) -> Self {
        Self { dp, sp }
    }
    /// Density-independent pixels to whole pixels, rounded half up.
    pub fn dp(&self, v: f32) -> f32 {
        (v * self.dp + 0.5).trunc()
    }
    /// Scale-independent (font) pixels to whole pixels, rounded half up.
    pub fn sp(&self, v: f32) -> f32 {
        (v * self.sp + 0.5).trunc()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
