use crate::core::flight::limits::FlightLimits;
use crate::core::flight::state::{FlightState, WingState};
use glam::{Mat4, Vec3};

/// Advances the perched (idle) state by one frame.
///
/// Each wing eases toward its own target and the body bobs toward its height target.
/// Orientation and the anchor position are left untouched.
pub fn step_idle(state: &mut FlightState, limits: &FlightLimits) {
    ease_wing(&mut state.left_wing, limits.wing_ease_divisor);
    ease_wing(&mut state.right_wing, limits.wing_ease_divisor);

    let factor = limits.body_bob_factor;
    state.body_height = state.target_body_height * factor + state.body_height * (1.0 - factor);

    state.translation = Mat4::from_translation(state.position + Vec3::Z * state.body_height);
}

fn ease_wing(wing: &mut WingState, divisor: f32) {
    wing.velocity = (wing.target - wing.roll) / divisor;
    wing.roll += wing.velocity;
}

#[cfg(test)]
mod tests {
    use super::step_idle;
    use crate::core::flight::{FlightLimits, FlightState};
    use glam::{Mat4, Vec3};

    const EPSILON: f32 = 1e-5;

    #[test]
    fn wings_decay_geometrically_toward_their_own_targets() {
        let limits = FlightLimits::default();
        let mut state = FlightState::default();
        state.left_wing.target = 40.0_f32.to_radians();
        state.right_wing.target = -35.0_f32.to_radians();

        step_idle(&mut state, &limits);
        let left_error = state.left_wing.target - state.left_wing.roll;
        let right_error = state.right_wing.target - state.right_wing.roll;
        assert!((left_error - 0.8 * 40.0_f32.to_radians()).abs() < EPSILON);
        assert!((right_error + 0.8 * 35.0_f32.to_radians()).abs() < EPSILON);

        for _ in 0..100 {
            step_idle(&mut state, &limits);
        }

        assert!((state.left_wing.roll - state.left_wing.target).abs() < EPSILON);
        assert!((state.right_wing.roll - state.right_wing.target).abs() < EPSILON);
    }

    #[test]
    fn body_height_is_low_pass_filtered() {
        let limits = FlightLimits::default();
        let mut state = FlightState {
            target_body_height: 0.004,
            ..FlightState::default()
        };

        step_idle(&mut state, &limits);
        assert!((state.body_height - 0.002).abs() < EPSILON);

        step_idle(&mut state, &limits);
        assert!((state.body_height - 0.003).abs() < EPSILON);
    }

    #[test]
    fn translation_includes_bob_without_moving_anchor() {
        let limits = FlightLimits::default();
        let mut state = FlightState {
            target_body_height: 0.01,
            ..FlightState::default()
        };
        let anchor = state.position;

        step_idle(&mut state, &limits);

        assert_eq!(state.position, anchor);
        assert_eq!(
            state.translation,
            Mat4::from_translation(anchor + Vec3::Z * state.body_height)
        );
    }

    #[test]
    fn idle_leaves_orientation_alone() {
        let limits = FlightLimits::default();
        let mut state = FlightState {
            rotation: Mat4::from_rotation_x(0.3),
            ..FlightState::default()
        };
        let rotation = state.rotation;

        step_idle(&mut state, &limits);

        assert_eq!(state.rotation, rotation);
    }
}
