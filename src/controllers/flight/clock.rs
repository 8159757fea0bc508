use crate::core::flight::FlightLimits;
use std::time::Duration;

/// Slack, in ticks, for elapsed times that land a few nanoseconds short of a tick.
const TICK_SLACK: f64 = 1e-6;

/// Converts wall-clock frame time into a whole number of fixed simulation ticks.
pub struct FrameClock {
    tick_secs: f64,
    max_ticks_per_frame: u32,
    accumulator_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTicks {
    pub ticks: u32,
    pub dropped_backlog: bool,
}

impl FrameClock {
    #[must_use]
    pub fn new(limits: &FlightLimits) -> Self {
        Self {
            tick_secs: limits.tick_secs(),
            max_ticks_per_frame: limits.max_ticks_per_frame,
            accumulator_secs: 0.0,
        }
    }

    /// Adds `elapsed` to the backlog and returns how many `dt` ticks to run now.
    ///
    /// A backlog larger than `max_ticks_per_frame` ticks is discarded rather than
    /// replayed on later frames.
    pub fn advance(&mut self, elapsed: Duration) -> FrameTicks {
        let dt = self.tick_secs;
        if !dt.is_finite() || dt <= 0.0 {
            return FrameTicks::default();
        }

        self.accumulator_secs += elapsed.as_secs_f64();
        if !self.accumulator_secs.is_finite() || self.accumulator_secs < 0.0 {
            self.accumulator_secs = 0.0;
        }

        let ticks_available = (self.accumulator_secs / dt + TICK_SLACK).floor();
        let max_ticks = f64::from(self.max_ticks_per_frame);
        let ticks = ticks_available.min(max_ticks) as u32;
        let dropped_backlog = ticks_available > max_ticks;

        if dropped_backlog {
            self.accumulator_secs = 0.0;
        } else {
            self.accumulator_secs = (self.accumulator_secs - f64::from(ticks) * dt).max(0.0);
        }

        FrameTicks {
            ticks,
            dropped_backlog,
        }
    }

    /// Step handed to the simulator for each tick.
    #[must_use]
    pub fn dt(&self) -> f32 {
        self.tick_secs as f32
    }

    pub fn reset(&mut self) {
        self.accumulator_secs = 0.0;
    }
}
