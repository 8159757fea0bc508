use crate::core::flight::limits::FlightLimits;
use glam::{Mat4, Vec3};

pub const START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 1.2);
pub const START_SPEED: f32 = 1.0;

/// One wing surface's animation channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WingState {
    pub roll: f32,
    pub velocity: f32,
    pub target: f32,
}

/// Unit axes of the avatar, read from the columns of its rotation transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub forward: Vec3,
    pub left: Vec3,
    pub up: Vec3,
}

impl Basis {
    #[must_use]
    pub fn of(rotation: &Mat4) -> Self {
        Self {
            forward: rotation.x_axis.truncate().normalize_or_zero(),
            left: rotation.y_axis.truncate().normalize_or_zero(),
            up: rotation.z_axis.truncate().normalize_or_zero(),
        }
    }
}

/// Kinematic and animation state of the avatar.
///
/// Orientation lives only in `rotation`; the forward/left/up axes are derived from it
/// on demand. Translation and rotation are kept as separate transforms so either can
/// be rebuilt without touching the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub speed: f32,
    pub translation: Mat4,
    pub rotation: Mat4,
    pub roll_angle: f32,
    pub roll_velocity: f32,
    pub target_roll_angle: f32,
    pub pitch_angle: f32,
    pub pitch_velocity: f32,
    pub left_wing: WingState,
    pub right_wing: WingState,
    pub body_height: f32,
    pub target_body_height: f32,
}

impl FlightState {
    /// The pose used both at construction and after a reset.
    #[must_use]
    pub fn initial(limits: &FlightLimits) -> Self {
        let wing = WingState {
            roll: 0.0,
            velocity: limits.flap_rate,
            target: 0.0,
        };

        Self {
            position: START_POSITION,
            velocity: Vec3::ONE * START_SPEED,
            speed: START_SPEED,
            translation: Mat4::from_translation(START_POSITION),
            rotation: Mat4::IDENTITY,
            roll_angle: 0.0,
            roll_velocity: 0.0,
            target_roll_angle: 0.0,
            pitch_angle: 0.0,
            pitch_velocity: 0.0,
            left_wing: wing,
            right_wing: wing,
            body_height: 0.0,
            target_body_height: 0.0,
        }
    }

    #[must_use]
    pub fn basis(&self) -> Basis {
        Basis::of(&self.rotation)
    }

    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.basis().forward
    }

    #[must_use]
    pub fn left(&self) -> Vec3 {
        self.basis().left
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.basis().up
    }

    /// Render pose: translation composed with rotation.
    #[must_use]
    pub fn pose_transform(&self) -> Mat4 {
        self.translation * self.rotation
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self::initial(&FlightLimits::default())
    }
}
