use crate::core::flight::controls::PilotInputs;
use crate::core::flight::limits::FlightLimits;
use crate::core::flight::state::{Basis, FlightState, WingState};
use crate::core::flight::status::{AltitudeGuard, FlightStepReport};
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_4;

/// Advances the flying state by one frame.
///
/// `dt` must already be sanitized (finite and non-negative).
/// Roll, pitch and the flap oscillator move by per-frame amounts; forces and
/// throttle scale with `dt`.
pub fn step_flying(
    state: &mut FlightState,
    inputs: PilotInputs,
    dt: f32,
    limits: &FlightLimits,
) -> FlightStepReport {
    let mut report = FlightStepReport::default();

    // pitch steers off the orientation the frame started with
    let basis = state.basis();

    report.speed_clamped = apply_throttle(state, inputs.throttle, dt, limits);
    report.roll_limited = step_roll(state, inputs.aileron, limits);

    let (pitch_limited, altitude_guard) = step_pitch(state, &basis, inputs.elevator, dt, limits);
    report.pitch_limited = pitch_limited;
    report.altitude_guard = altitude_guard;

    let forces = accumulate_forces(state, limits);
    let (lift, banked_turn) = bank_into_turn(state, forces.lift, dt, limits);
    report.banked_turn = banked_turn;

    flap_wings(state, limits);

    let acceleration = forces.thrust + forces.drag + forces.gravity + lift;
    state.velocity += acceleration * dt;
    state.position += state.velocity * dt;
    state.translation = Mat4::from_translation(state.position);

    report
}

fn apply_throttle(state: &mut FlightState, throttle: i8, dt: f32, limits: &FlightLimits) -> bool {
    if throttle == 0 {
        return false;
    }

    let requested = state.speed + limits.throttle_gain * f32::from(throttle) * dt;
    state.speed = requested.clamp(0.0, limits.max_speed);

    state.speed != requested
}

/// First-order approach toward the target roll, capped per frame.
fn step_roll(state: &mut FlightState, aileron: f32, limits: &FlightLimits) -> bool {
    let max_rate = limits.max_roll_velocity;
    let desired = (state.target_roll_angle - state.roll_angle) / limits.roll_approach_divisor
        + aileron * max_rate;

    let step = limit_angle_step(
        state.roll_angle,
        desired.clamp(-max_rate, max_rate),
        limits.max_roll_angle,
    );
    state.roll_velocity = step.delta;

    if step.delta.abs() > limits.angle_epsilon {
        state.roll_angle =
            (state.roll_angle + step.delta).clamp(-limits.max_roll_angle, limits.max_roll_angle);
        state.rotation = state.rotation * Mat4::from_axis_angle(Vec3::X, step.delta);
    }

    step.limited
}

fn step_pitch(
    state: &mut FlightState,
    basis: &Basis,
    elevator: f32,
    dt: f32,
    limits: &FlightLimits,
) -> (bool, Option<AltitudeGuard>) {
    let rate = limits.pitch_approach_rate;

    let (mut target, mut positive_regime) = if elevator != 0.0 {
        (FRAC_PI_4 * (1.0 - basis.left.z) * elevator, elevator > 0.0)
    } else {
        (
            -state.pitch_velocity / limits.pitch_decay_divisor,
            sign(basis.up.z) * sign(basis.forward.z) > 0.0,
        )
    };

    let altitude = state.position.z;
    let mut guard = None;
    if altitude > limits.max_altitude && state.pitch_angle < 0.0 {
        target = limits.altitude_guard_pitch_velocity;
        positive_regime = true;
        guard = Some(AltitudeGuard::AboveCeiling);
    } else if altitude < limits.min_altitude && state.pitch_angle > 0.0 {
        target = -limits.altitude_guard_pitch_velocity;
        positive_regime = false;
        guard = Some(AltitudeGuard::BelowFloor);
    }

    let approached = state.pitch_velocity + target * rate;
    state.pitch_velocity = if positive_regime {
        approached.min(target)
    } else {
        approached.max(target)
    };

    let step = limit_angle_step(
        state.pitch_angle,
        state.pitch_velocity * dt,
        limits.max_pitch_angle,
    );
    if step.blocked {
        state.pitch_velocity = 0.0;
    }

    if step.delta.abs() > limits.angle_epsilon {
        state.pitch_angle = (state.pitch_angle + step.delta)
            .clamp(-limits.max_pitch_angle, limits.max_pitch_angle);
        state.rotation = state.rotation * Mat4::from_axis_angle(Vec3::Y, step.delta);
    }

    (step.limited, guard)
}

struct AngleStep {
    delta: f32,
    limited: bool,
    blocked: bool,
}

/// Hard envelope on an accumulated angle. A step that starts at the limit and pushes
/// outward is dropped; a step that would cross the limit stops exactly on it.
fn limit_angle_step(angle: f32, delta: f32, max_angle: f32) -> AngleStep {
    if (angle >= max_angle && delta > 0.0) || (angle <= -max_angle && delta < 0.0) {
        return AngleStep {
            delta: 0.0,
            limited: true,
            blocked: true,
        };
    }

    let next = angle + delta;
    if next > max_angle {
        AngleStep {
            delta: max_angle - angle,
            limited: true,
            blocked: false,
        }
    } else if next < -max_angle {
        AngleStep {
            delta: -max_angle - angle,
            limited: true,
            blocked: false,
        }
    } else {
        AngleStep {
            delta,
            limited: false,
            blocked: false,
        }
    }
}

struct Forces {
    thrust: Vec3,
    drag: Vec3,
    gravity: Vec3,
    lift: Vec3,
}

fn accumulate_forces(state: &FlightState, limits: &FlightLimits) -> Forces {
    let basis = state.basis();
    let velocity = state.velocity;
    let airspeed = basis.forward.dot(velocity);
    let lift = basis.up * limits.lift_coefficient * airspeed * airspeed;

    Forces {
        thrust: basis.forward * limits.thrust_coefficient * state.speed,
        drag: -velocity.normalize_or_zero() * limits.drag_coefficient * velocity.length_squared(),
        gravity: Vec3::NEG_Z * limits.gravity,
        lift: Vec3::new(0.0, 0.0, lift.z),
    }
}

/// Turns bank into heading change: a centripetal term joins the lift, and the whole
/// orientation yaws about the world vertical at the matching angular rate.
fn bank_into_turn(
    state: &mut FlightState,
    lift: Vec3,
    dt: f32,
    limits: &FlightLimits,
) -> (Vec3, bool) {
    let basis = state.basis();
    let bank = basis.left.z.abs();
    if bank < limits.min_bank_for_turn {
        return (lift, false);
    }

    let radius = limits.turn_radius_factor / bank;
    let velocity = state.velocity;
    let centripetal = Vec3::new(basis.up.x, basis.up.y, 0.0).normalize_or_zero()
        * velocity.length_squared()
        / radius;

    let direction = sign(velocity.cross(centripetal).z);
    if direction != 0.0 {
        // rotation-only, so the transpose is the inverse
        let local_axis = state
            .rotation
            .transpose()
            .transform_vector3(Vec3::new(0.0, 0.0, direction))
            .normalize_or_zero();

        if local_axis != Vec3::ZERO {
            let angle = velocity.length() / radius * dt;
            state.rotation = state.rotation * Mat4::from_axis_angle(local_axis, angle);
        }
    }

    (lift + centripetal, true)
}

/// Triangle-wave flapping; the right wing follows the left one.
fn flap_wings(state: &mut FlightState, limits: &FlightLimits) {
    let wing: &mut WingState = &mut state.left_wing;
    wing.roll += wing.velocity;

    if wing.velocity > 0.0 && wing.roll > limits.flap_amplitude {
        wing.velocity = -limits.flap_rate;
    } else if wing.velocity < 0.0 && wing.roll < -limits.flap_amplitude {
        wing.velocity = limits.flap_rate;
    }

    state.right_wing.roll = state.left_wing.roll;
}

fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
