pub mod config;
pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod trace;

pub use crate::config::{ConfigError, HostConfig};
pub use crate::controllers::flight::ports::{AvatarRig, ModelPort, SoundCue, SoundEffectPort};
pub use crate::controllers::flight::{FlightSimulator, FrameClock};
pub use crate::core::flight::{FlightLimits, FlightMode, FlightState, PilotInputs};
pub use crate::input::commands::{HostError, RunHostCommand};
pub use crate::input::control::{ChannelConfig, ChannelError, ControlChannel, ControlPayload};
pub use crate::trace::init_tracing;
