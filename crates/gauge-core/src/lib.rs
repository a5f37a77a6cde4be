// File: crates/gauge-core/src/lib.rs
// Summary: Core library entry point; exports the gauge model, renderer and animation API.

pub mod animation;
pub mod attrs;
pub mod axis;
pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod gauge;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod text;
pub mod types;

pub use animation::{accelerate_decelerate, Animator, Tick, REVEAL_DURATION};
pub use axis::{active_band, default_axis_lines, AxisLine, BandLayout};
pub use color::Color;
pub use command::{DisplayList, DrawCommand, Part, Stroke};
pub use config::GaugeConfig;
pub use error::{GaugeError, Result};
pub use format::{format_default, ValueFormatter};
pub use gauge::Gauge;
pub use geometry::{Point, RectF, Rotation};
pub use layout::GaugeLayout;
pub use render::{GaugeRenderer, RenderState};
pub use text::{ApproxMetrics, FontMetrics, TextMetrics};
pub use types::{Density, Insets, Surface};
