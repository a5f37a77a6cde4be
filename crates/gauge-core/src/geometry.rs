// File: crates/gauge-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate about `pivot` by `degrees`, clockwise on a y-down screen.
    pub fn rotated(self, degrees: f32, pivot: Point) -> Point {
        let (s, c) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point::new(pivot.x + dx * c - dy * s, pivot.y + dx * s + dy * c)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Square of half-side `r` centered on `c`.
    pub fn around(c: Point, r: f32) -> Self {
        Self::from_ltrb(c.x - r, c.y - r, c.x + r, c.y + r)
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}

/// Rotation applied to a primitive's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
    pub pivot: Point,
}

impl Rotation {
    pub const fn new(degrees: f32, pivot: Point) -> Self {
        Self { degrees, pivot }
    }
    pub fn apply(&self, p: Point) -> Point {
        p.rotated(self.degrees, self.pivot)
    }
}
