use crate::config::HostConfig;
use crate::controllers::flight::{FlightSimulator, FrameClock};
use crate::core::flight::PilotInputs;
use crate::input::commands::errors::HostError;
use crate::input::control::{ControlChannel, ControlPayload};
use crate::presenters::log::{LoggedSoundEffects, logged_rig};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Runs the headless host: waits for the controller, then flies the avatar from its
/// payloads at a fixed tick rate.
pub struct RunHostCommand {
    config: HostConfig,
}

impl RunHostCommand {
    #[must_use]
    pub fn new(config: HostConfig) -> Self {
        Self { config }
    }

    /// Reads the host configuration from the process environment.
    pub fn from_env() -> Result<Self, HostError> {
        Ok(Self::new(HostConfig::from_env()?))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        Ok(Self::new(HostConfig::from_lookup(lookup)?))
    }

    pub fn execute(&self) -> Result<(), HostError> {
        let mut channel = ControlChannel::open(self.config.channel)?;
        let mut simulator = FlightSimulator::new(
            self.config.limits,
            logged_rig(),
            Arc::new(LoggedSoundEffects::default()),
        );

        let bounds = simulator.local_bounds();
        info!(
            bounds_min = ?bounds.min(),
            bounds_max = ?bounds.max(),
            bounds_size = ?bounds.size(),
            tick_hz = self.config.limits.tick_hz,
            "avatar ready"
        );

        let ticks = run_frames(&mut channel, &mut simulator, self.config.max_frames);
        info!(ticks, "host finished");

        Ok(())
    }
}

/// Drives `simulator` from `channel` until `max_ticks` simulation ticks have run.
/// Returns the number of ticks run.
pub fn run_frames(
    channel: &mut ControlChannel,
    simulator: &mut FlightSimulator,
    max_ticks: Option<u64>,
) -> u64 {
    let mut clock = FrameClock::new(simulator.limits());
    let frame_period = Duration::from_secs_f32(clock.dt());
    let mut inputs = PilotInputs::default();
    let mut ticks_run = 0_u64;
    let mut last_frame = Instant::now();

    info!(?max_ticks, "host loop started");

    'frames: loop {
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;

        let payload = channel.latest_payload();
        if apply_payload(simulator, &payload, &mut inputs) {
            clock.reset();
        }

        let ticks = clock.advance(elapsed);
        if ticks.dropped_backlog {
            debug!("frame backlog dropped");
        }

        for _ in 0..ticks.ticks {
            if max_ticks.is_some_and(|max| ticks_run >= max) {
                break 'frames;
            }
            simulator.update(clock.dt(), inputs.take());
            ticks_run += 1;
        }
        if max_ticks.is_some_and(|max| ticks_run >= max) {
            break;
        }

        let busy = now.elapsed();
        if busy < frame_period {
            thread::sleep(frame_period - busy);
        }
    }

    info!(ticks_run, position = ?simulator.position(), "host loop stopped");
    ticks_run
}

/// Feeds one payload into the simulator and the pending inputs.
///
/// Returns `true` when the payload ended a flight and the avatar was reset.
pub fn apply_payload(
    simulator: &mut FlightSimulator,
    payload: &ControlPayload,
    inputs: &mut PilotInputs,
) -> bool {
    let reset = simulator.set_game_state(payload.game_state);

    simulator.set_target_roll_angle(payload.target_roll);
    simulator.set_left_wing_angle(payload.left_wing_angle);
    simulator.set_right_wing_angle(payload.right_wing_angle);
    simulator.set_body_height_target(payload.body_height);
    inputs.elevate(payload.target_pitch);

    reset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flight::{FlightLimits, FlightMode};
    use crate::input::control::{ChannelConfig, ControlListener};
    use glam::Vec3;
    use std::io::Write;
    use std::net::TcpStream;

    const EPSILON: f32 = 1e-5;

    fn flying_payload() -> ControlPayload {
        ControlPayload {
            target_roll: 20,
            target_pitch: -3,
            game_state: 1,
            left_wing_angle: 30,
            right_wing_angle: -30,
            body_height: 600,
        }
    }

    #[test]
    fn bad_environment_is_a_config_error() {
        let result = RunHostCommand::from_lookup(|name| {
            (name == crate::config::MAX_FRAMES_VAR).then(|| "forever".to_string())
        });

        assert!(matches!(result, Err(HostError::Config(_))));
    }

    #[test]
    fn slow_tick_rate_is_a_config_error() {
        let result = RunHostCommand::from_lookup(|name| {
            (name == crate::config::TICK_HZ_VAR).then(|| "5".to_string())
        });

        assert!(matches!(result, Err(HostError::Config(_))));
    }

    #[test]
    fn apply_payload_maps_every_field() {
        let mut simulator = FlightSimulator::headless(FlightLimits::default());
        let mut inputs = PilotInputs::default();

        let reset = apply_payload(&mut simulator, &flying_payload(), &mut inputs);

        let state = simulator.state();
        assert!(!reset);
        assert_eq!(simulator.mode(), FlightMode::Flying);
        assert!((state.target_roll_angle - 20.0_f32.to_radians()).abs() < EPSILON);
        assert!((state.left_wing.target - 30.0_f32.to_radians()).abs() < EPSILON);
        assert!((state.right_wing.target + 30.0_f32.to_radians()).abs() < EPSILON);
        assert!((state.target_body_height - 0.2).abs() < EPSILON);
        assert_eq!(inputs.elevator, -1.0);
    }

    #[test]
    fn zero_pitch_leaves_elevator_neutral() {
        let mut simulator = FlightSimulator::headless(FlightLimits::default());
        let mut inputs = PilotInputs::default();

        apply_payload(&mut simulator, &ControlPayload::default(), &mut inputs);

        assert!(inputs.is_neutral());
        assert_eq!(simulator.mode(), FlightMode::Idle);
    }

    #[test]
    fn apply_payload_reports_reset_once() {
        let mut simulator = FlightSimulator::headless(FlightLimits::default());
        let mut inputs = PilotInputs::default();
        let landing = ControlPayload::default();

        apply_payload(&mut simulator, &flying_payload(), &mut inputs);
        simulator.update(1.0 / 60.0, inputs.take());

        assert!(apply_payload(&mut simulator, &landing, &mut inputs));
        assert!(!apply_payload(&mut simulator, &landing, &mut inputs));
        assert_eq!(simulator.position(), Vec3::new(0.0, 0.0, 1.2));
    }

    #[test]
    fn host_loop_flies_from_network_payloads() {
        let config = ChannelConfig::with_bind_addr("127.0.0.1:0".parse().unwrap());
        let listener = ControlListener::bind(config).unwrap();
        let mut client = TcpStream::connect(listener.local_addr().unwrap()).unwrap();
        let mut channel = listener.accept();
        client
            .write_all(
                ControlPayload {
                    target_pitch: 0,
                    ..flying_payload()
                }
                .as_bytes(),
            )
            .unwrap();
        let mut simulator = FlightSimulator::headless(FlightLimits::default());

        let ticks = run_frames(&mut channel, &mut simulator, Some(30));

        assert_eq!(ticks, 30);
        assert!(simulator.is_flying());
        assert_ne!(simulator.position(), Vec3::new(0.0, 0.0, 1.2));
        channel.shutdown();
    }

    #[test]
    fn host_loop_after_peer_leaves_stays_perched() {
        let config = ChannelConfig::with_bind_addr("127.0.0.1:0".parse().unwrap());
        let listener = ControlListener::bind(config).unwrap();
        let client = TcpStream::connect(listener.local_addr().unwrap()).unwrap();
        let mut channel = listener.accept();
        drop(client);
        let mut simulator = FlightSimulator::headless(FlightLimits::default());

        let ticks = run_frames(&mut channel, &mut simulator, Some(5));

        assert_eq!(ticks, 5);
        assert!(!simulator.is_flying());
        assert_eq!(simulator.position(), Vec3::new(0.0, 0.0, 1.2));
    }
}
