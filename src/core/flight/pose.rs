use crate::core::flight::state::FlightState;
use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

pub const LEFT_WING_OFFSET: Vec3 = Vec3::new(0.013, 0.005, 0.014);
pub const RIGHT_WING_OFFSET: Vec3 = Vec3::new(0.013, -0.005, 0.014);

const PERCH_OFFSET: Vec3 = Vec3::new(-0.026, 0.15, 0.0);
const PERCH_HEIGHT: f32 = 0.207;
const PERCH_SCALE: Vec3 = Vec3::new(0.065, 0.065, 0.05);

/// World transforms for the body and both wing sub-parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarPose {
    pub body: Mat4,
    pub left_wing: Mat4,
    pub right_wing: Mat4,
}

impl AvatarPose {
    /// Wings hang off the body at fixed offsets and roll about the forward axis;
    /// the right wing mirrors the left one's sign.
    #[must_use]
    pub fn compose(state: &FlightState) -> Self {
        let body = state.pose_transform();

        Self {
            body,
            left_wing: body
                * Mat4::from_translation(LEFT_WING_OFFSET)
                * Mat4::from_rotation_x(state.left_wing.roll),
            right_wing: body
                * Mat4::from_translation(RIGHT_WING_OFFSET)
                * Mat4::from_rotation_x(-state.right_wing.roll),
        }
    }
}

/// Places the perch prop (the tree the avatar starts on) next to the start position.
#[must_use]
pub fn perch_transform(start: Vec3) -> Mat4 {
    let anchor = Vec3::new(
        start.x + PERCH_OFFSET.x,
        start.y + PERCH_OFFSET.y,
        PERCH_HEIGHT,
    );

    Mat4::from_translation(anchor)
        * Mat4::from_rotation_z(-FRAC_PI_2)
        * Mat4::from_rotation_x(FRAC_PI_2)
        * Mat4::from_scale(PERCH_SCALE)
}

#[cfg(test)]
mod tests {
    use super::{AvatarPose, LEFT_WING_OFFSET, RIGHT_WING_OFFSET, perch_transform};
    use crate::core::flight::state::FlightState;
    use glam::Vec3;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn level_pose_offsets_wings_from_body() {
        let state = FlightState::default();

        let pose = AvatarPose::compose(&state);
        let body_origin = pose.body.transform_point3(Vec3::ZERO);
        let left_origin = pose.left_wing.transform_point3(Vec3::ZERO);
        let right_origin = pose.right_wing.transform_point3(Vec3::ZERO);

        assert!((left_origin - (body_origin + LEFT_WING_OFFSET)).length() < EPSILON);
        assert!((right_origin - (body_origin + RIGHT_WING_OFFSET)).length() < EPSILON);
    }

    #[test]
    fn wing_rolls_are_mirrored() {
        let mut state = FlightState::default();
        state.left_wing.roll = 0.3;
        state.right_wing.roll = 0.3;

        let pose = AvatarPose::compose(&state);
        let left_tip = pose.left_wing.transform_vector3(Vec3::Y);
        let right_tip = pose.right_wing.transform_vector3(Vec3::Y);

        assert!(left_tip.z > 0.0);
        assert!(right_tip.z < 0.0);
        assert!((left_tip.z + right_tip.z).abs() < EPSILON);
    }

    #[test]
    fn perch_sits_beside_start_position() {
        let start = Vec3::new(1.0, 2.0, 1.2);

        let origin = perch_transform(start).transform_point3(Vec3::ZERO);

        assert!((origin - Vec3::new(0.974, 2.15, 0.207)).length() < EPSILON);
    }
}
