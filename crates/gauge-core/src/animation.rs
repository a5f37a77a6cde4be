// File: crates/gauge-core/src/animation.rs
// Summary: Reveal animation: accelerate-decelerate easing and a cancellable, time-sampled tick producer.

use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// Default reveal duration.
pub const REVEAL_DURATION: Duration = Duration::from_millis(750);

/// Slow start, fast middle, slow end. `f(0) = 0`, `f(1) = 1`.
pub fn accelerate_decelerate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

/// One step of a running animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Eased progress in `[0, 1]`.
    pub fraction: f32,
    /// Last tick of the run; the animator is idle afterwards.
    pub finished: bool,
}

#[derive(Clone, Copy, Debug)]
struct Run {
    started: Instant,
    generation: u64,
}

/// Produces eased fractions for at most one run at a time. The owner
/// samples it with the frame time; starting again replaces the old run.
#[derive(Clone, Debug)]
pub struct Animator {
    duration: Duration,
    easing: fn(f32) -> f32,
    run: Option<Run>,
    generation: u64,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(REVEAL_DURATION)
    }
}

impl Animator {
    pub fn new(duration: Duration) -> Self {
        Self::with_easing(duration, accelerate_decelerate)
    }

    pub fn with_easing(duration: Duration, easing: fn(f32) -> f32) -> Self {
        Self { duration, easing, run: None, generation: 0 }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start a run at `now`, cancelling any run in flight.
    /// Returns the run's generation.
    pub fn start(&mut self, now: Instant) -> u64 {
        if self.run.is_some() {
            self.cancel();
        }
        self.generation += 1;
        self.run = Some(Run { started: now, generation: self.generation });
        log::debug!("reveal animation #{} started ({:?})", self.generation, self.duration);
        self.generation
    }

    pub fn cancel(&mut self) {
        if let Some(run) = self.run.take() {
            log::debug!("reveal animation #{} cancelled", run.generation);
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Generation of the run in flight, if any.
    pub fn current(&self) -> Option<u64> {
        self.run.map(|r| r.generation)
    }

    /// Progress at `now`; `None` when idle. The finishing tick ends the run.
    pub fn sample(&mut self, now: Instant) -> Option<Tick> {
        let run = self.run?;
        let elapsed = now.saturating_duration_since(run.started);
        let linear = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let finished = linear >= 1.0;
        let fraction = if finished { 1.0 } else { (self.easing)(linear).clamp(0.0, 1.0) };
        if finished {
            self.run = None;
            log::debug!("reveal animation #{} finished", run.generation);
        }
        Some(Tick { fraction, finished })
    }
}
