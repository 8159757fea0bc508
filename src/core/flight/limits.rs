use std::f32::consts::PI;

/// Tunable constants of the flight model.
///
/// Angles are radians, per-frame quantities are applied once per `update` call
/// regardless of `dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightLimits {
    pub tick_hz: u32,
    pub max_ticks_per_frame: u32,
    pub max_step_secs: f32,
    pub max_roll_angle: f32,
    pub max_pitch_angle: f32,
    pub max_roll_velocity: f32,
    pub roll_approach_divisor: f32,
    pub pitch_approach_rate: f32,
    pub pitch_decay_divisor: f32,
    pub min_altitude: f32,
    pub max_altitude: f32,
    pub altitude_guard_pitch_velocity: f32,
    pub max_speed: f32,
    pub throttle_gain: f32,
    pub thrust_coefficient: f32,
    pub drag_coefficient: f32,
    pub gravity: f32,
    pub lift_coefficient: f32,
    pub turn_radius_factor: f32,
    pub min_bank_for_turn: f32,
    pub angle_epsilon: f32,
    pub flap_amplitude: f32,
    pub flap_rate: f32,
    pub wing_ease_divisor: f32,
    pub body_bob_factor: f32,
    pub body_height_scale: f32,
}

impl FlightLimits {
    /// Length of one fixed tick in seconds, kept in `f64` for wall-clock accumulation.
    #[must_use]
    pub fn tick_secs(&self) -> f64 {
        if self.tick_hz == 0 {
            0.0
        } else {
            1.0 / f64::from(self.tick_hz)
        }
    }

    #[must_use]
    pub fn dt(&self) -> f32 {
        self.tick_secs() as f32
    }

    /// Whether the fixed tick is short enough for the explicit Euler integration
    /// to stay stable under quadratic drag.
    #[must_use]
    pub fn tick_is_stable(&self) -> bool {
        let tick = self.tick_secs();
        tick > 0.0 && tick <= f64::from(self.max_step_secs)
    }

    /// Negative and non-finite steps become zero; any other step is used as given.
    #[must_use]
    pub fn sanitize_dt(dt: f32) -> f32 {
        if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
    }
}

impl Default for FlightLimits {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            max_ticks_per_frame: 10,
            max_step_secs: 0.05,
            max_roll_angle: PI / 6.0,
            max_pitch_angle: PI / 6.0,
            max_roll_velocity: 0.2,
            roll_approach_divisor: 5.0,
            pitch_approach_rate: 0.5,
            pitch_decay_divisor: 5.0,
            min_altitude: 1.0,
            max_altitude: 2.5,
            altitude_guard_pitch_velocity: 0.3,
            max_speed: 3.0,
            throttle_gain: 0.5,
            thrust_coefficient: 15.0,
            drag_coefficient: 15.0,
            gravity: 2.0,
            lift_coefficient: 2.0,
            turn_radius_factor: 3.8,
            min_bank_for_turn: 0.1,
            angle_epsilon: 1e-5,
            flap_amplitude: 10.0_f32.to_radians(),
            flap_rate: 0.01,
            wing_ease_divisor: 5.0,
            body_bob_factor: 0.5,
            body_height_scale: 3000.0,
        }
    }
}
