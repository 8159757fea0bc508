/// Edge-triggered pilot commands gathered between two frames.
///
/// The host owns one of these, records commands into it as they arrive and hands
/// it to the simulator with [`PilotInputs::take`], which leaves a neutral value
/// behind. A command therefore affects exactly one update, no matter how many
/// updates run between two input events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PilotInputs {
    pub aileron: f32,
    pub elevator: f32,
    pub throttle: i8,
}

impl PilotInputs {
    pub fn roll(&mut self, direction: i32) {
        self.aileron = unit_direction(direction);
    }

    pub fn elevate(&mut self, direction: i32) {
        self.elevator = unit_direction(direction);
    }

    pub fn throttle(&mut self, delta: i8) {
        self.throttle = delta;
    }

    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

fn unit_direction(direction: i32) -> f32 {
    match direction.signum() {
        1 => 1.0,
        -1 => -1.0,
        _ => 0.0,
    }
}
