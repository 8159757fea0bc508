#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudeGuard {
    AboveCeiling,
    BelowFloor,
}

/// What the integrator had to override during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlightStepReport {
    pub speed_clamped: bool,
    pub roll_limited: bool,
    pub pitch_limited: bool,
    pub altitude_guard: Option<AltitudeGuard>,
    pub banked_turn: bool,
}

impl FlightStepReport {
    #[must_use]
    pub fn any_limit(&self) -> bool {
        self.speed_clamped
            || self.roll_limited
            || self.pitch_limited
            || self.altitude_guard.is_some()
    }
}
