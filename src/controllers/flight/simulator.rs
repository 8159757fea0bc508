use crate::controllers::flight::ports::{AvatarRig, SilentSoundEffects, SoundCue, SoundEffectPort};
use crate::core::data::aabb::Aabb;
use crate::core::flight::{
    AvatarPose, FlightLimits, FlightMode, FlightState, FlightStepReport, PilotInputs,
    perch_transform, step_flying, step_idle,
};
use glam::{Mat4, Vec3};
use std::sync::Arc;
use tracing::{info, trace, warn};

/// Drives the avatar: a two-state machine (perched / flying) over one [`FlightState`].
pub struct FlightSimulator {
    state: FlightState,
    mode: FlightMode,
    limits: FlightLimits,
    rig: AvatarRig,
    sounds: Arc<dyn SoundEffectPort>,
}

impl FlightSimulator {
    pub fn new(limits: FlightLimits, rig: AvatarRig, sounds: Arc<dyn SoundEffectPort>) -> Self {
        let simulator = Self {
            state: FlightState::initial(&limits),
            mode: FlightMode::Idle,
            limits,
            rig,
            sounds,
        };

        simulator.place_perch();
        simulator.propagate_pose();
        simulator
    }

    #[must_use]
    pub fn headless(limits: FlightLimits) -> Self {
        Self::new(limits, AvatarRig::detached(), Arc::new(SilentSoundEffects))
    }

    /// Advances one frame in the current mode and pushes the new pose to the rig.
    pub fn update(&mut self, dt: f32, inputs: PilotInputs) -> FlightStepReport {
        let dt = FlightLimits::sanitize_dt(dt);

        let report = match self.mode {
            FlightMode::Flying => step_flying(&mut self.state, inputs, dt, &self.limits),
            FlightMode::Idle => {
                step_idle(&mut self.state, &self.limits);
                FlightStepReport::default()
            }
        };

        if report.any_limit() {
            trace!(?report, altitude = self.state.position.z, "flight envelope enforced");
        }

        self.propagate_pose();
        report
    }

    /// Applies the controller's game state. Returns `true` only on the frame a flight
    /// ends and the avatar is put back on its perch.
    ///
    /// Any value other than 1 stops the flight, but only 0 resets the avatar.
    pub fn set_game_state(&mut self, game_state: i32) -> bool {
        let requested = FlightMode::from_game_state(game_state);

        match (self.mode, requested) {
            (FlightMode::Flying, FlightMode::Idle)
                if game_state == FlightMode::RESET_GAME_STATE =>
            {
                self.reset();
                true
            }
            (FlightMode::Flying, FlightMode::Idle) => {
                warn!(game_state, "unrecognised game state, flight stopped without reset");
                self.mode = FlightMode::Idle;
                false
            }
            (FlightMode::Idle, FlightMode::Flying) => {
                self.take_off();
                false
            }
            _ => false,
        }
    }

    pub fn set_target_roll_angle(&mut self, degrees: i32) {
        self.state.target_roll_angle = (degrees as f32).to_radians();
    }

    pub fn set_left_wing_angle(&mut self, degrees: i32) {
        self.state.left_wing.target = (degrees as f32).to_radians();
    }

    pub fn set_right_wing_angle(&mut self, degrees: i32) {
        self.state.right_wing.target = (degrees as f32).to_radians();
    }

    pub fn set_body_height_target(&mut self, device_units: i32) {
        self.state.target_body_height = device_units as f32 / self.limits.body_height_scale;
    }

    /// Lifts the avatar one unit straight up, outside the integrator.
    pub fn recover(&mut self) {
        self.state.position.z += 1.0;

        let bob = match self.mode {
            FlightMode::Flying => Vec3::ZERO,
            FlightMode::Idle => Vec3::Z * self.state.body_height,
        };
        self.state.translation = Mat4::from_translation(self.state.position + bob);
        self.propagate_pose();
    }

    pub fn crash(&self) {
        self.rig.body.darken();
    }

    #[must_use]
    pub fn model(&self) -> Mat4 {
        self.state.pose_transform()
    }

    #[must_use]
    pub fn pose(&self) -> AvatarPose {
        AvatarPose::compose(&self.state)
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.state.forward()
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.state.up()
    }

    #[must_use]
    pub fn left(&self) -> Vec3 {
        self.state.left()
    }

    #[must_use]
    pub fn local_bounds(&self) -> Aabb {
        self.rig.body.local_bounds()
    }

    #[must_use]
    pub fn state(&self) -> &FlightState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> FlightMode {
        self.mode
    }

    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.mode.is_flying()
    }

    #[must_use]
    pub fn limits(&self) -> &FlightLimits {
        &self.limits
    }

    fn reset(&mut self) {
        self.state = FlightState::initial(&self.limits);
        self.mode = FlightMode::Idle;

        self.propagate_pose();
        self.place_perch();

        self.sounds.stop(SoundCue::Wind);
        self.sounds.play(SoundCue::Reset);

        info!("flight ended, avatar reset to perch");
    }

    fn take_off(&mut self) {
        // wings eased to rest while perched; restart the flap oscillator
        let flap = self.limits.flap_rate;
        for wing in [&mut self.state.left_wing, &mut self.state.right_wing] {
            wing.velocity = if wing.velocity < 0.0 { -flap } else { flap };
        }
        self.mode = FlightMode::Flying;

        self.sounds.play(SoundCue::Wind);
        self.sounds.stop(SoundCue::Reset);
        self.sounds.play(SoundCue::Eagle);

        info!(position = ?self.state.position, "flight started");
    }

    fn propagate_pose(&self) {
        let pose = AvatarPose::compose(&self.state);

        self.rig.body.set_transform(pose.body);
        self.rig.left_wing.set_transform(pose.left_wing);
        self.rig.right_wing.set_transform(pose.right_wing);
    }

    fn place_perch(&self) {
        self.rig.perch.set_transform(perch_transform(self.state.position));
    }
}
