// File: crates/gauge-core/src/gauge.rs
// Summary: Gauge widget state: config, bands, reading, formatter and reveal animation behind host-facing operations.

use std::time::Instant;

use crate::animation::Animator;
use crate::axis::{default_axis_lines, AxisLine};
use crate::command::DisplayList;
use crate::config::GaugeConfig;
use crate::format::ValueFormatter;
use crate::render::{GaugeRenderer, RenderState};
use crate::text::TextMetrics;
use crate::types::Surface;

/// Everything one gauge instance owns. All mutation goes through
/// whole-value setters; `render` only reads.
pub struct Gauge {
    config: GaugeConfig,
    axis_lines: Vec<AxisLine>,
    state: RenderState,
    formatter: ValueFormatter,
    animator: Animator,
    attached: bool,
    dirty: bool,
}

impl Gauge {
    pub fn new(config: GaugeConfig) -> Self {
        let axis_lines = default_axis_lines(config.max);
        let fraction = if config.enable_animator { 0.0 } else { 1.0 };
        let state = RenderState::new(config.data_value, fraction);
        Self {
            config,
            axis_lines,
            state,
            formatter: ValueFormatter::default(),
            animator: Animator::default(),
            attached: false,
            dirty: true,
        }
    }

    pub fn config(&self) -> &GaugeConfig { &self.config }
    pub fn axis_lines(&self) -> &[AxisLine] { &self.axis_lines }
    pub fn state(&self) -> RenderState { self.state }
    pub fn is_attached(&self) -> bool { self.attached }
    pub fn is_animating(&self) -> bool { self.animator.is_running() }

    /// Replace the style. Axis lines are kept.
    pub fn set_config(&mut self, config: GaugeConfig) -> &mut Self {
        self.config = config;
        self.dirty = true;
        self
    }

    /// Replace all bands at once. An empty list draws no scale.
    pub fn set_axis_lines(&mut self, lines: Vec<AxisLine>) -> &mut Self {
        self.axis_lines = lines;
        self.dirty = true;
        self
    }

    pub fn set_value_formatter(&mut self, f: impl Fn(f32) -> String + Send + Sync + 'static) -> &mut Self {
        self.formatter = ValueFormatter::new(f);
        self.dirty = true;
        self
    }

    /// Swap the reveal driver (duration, easing). A run in flight is dropped.
    pub fn set_animator(&mut self, animator: Animator) -> &mut Self {
        self.animator.cancel();
        self.animator = animator;
        self
    }

    /// Store a new reading; reveal it again when animation is enabled.
    pub fn update_data_value(&mut self, value: f32, now: Instant) -> &mut Self {
        self.state.data_value = value;
        if self.config.enable_animator {
            self.start_animation(now);
        } else {
            self.dirty = true;
        }
        self
    }

    /// Restart the reveal from zero, replacing any run in flight.
    pub fn start_animation(&mut self, now: Instant) {
        self.state.animated_fraction = 0.0;
        self.animator.start(now);
        self.dirty = true;
    }

    /// Stop the reveal where it is.
    pub fn cancel_animation(&mut self) {
        self.animator.cancel();
    }

    /// Host put the gauge on screen.
    pub fn attach(&mut self, now: Instant) {
        self.attached = true;
        if self.config.enable_animator {
            self.start_animation(now);
        } else {
            self.state.animated_fraction = 1.0;
            self.dirty = true;
        }
    }

    /// Host removed the gauge. A running reveal jumps to its end and the
    /// driver is dropped so nothing touches the detached gauge.
    pub fn detach(&mut self) {
        self.attached = false;
        if self.animator.is_running() {
            self.animator.cancel();
            self.state.animated_fraction = 1.0;
        }
    }

    /// Advance the reveal to `now`. True when a redraw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(t) = self.animator.sample(now) {
            self.state.animated_fraction = t.fraction;
            self.dirty = true;
        }
        self.dirty
    }

    /// Read and clear the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn render(&self, surface: &Surface, metrics: &dyn TextMetrics) -> DisplayList {
        GaugeRenderer::new(metrics, &self.formatter).render(surface, &self.config, &self.axis_lines, self.state)
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new(GaugeConfig::default())
    }
}
