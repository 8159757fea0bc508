//! Boundaries between the simulator and the scene it drives.
//!
//! The simulator pushes transforms into models and fires sound cues; what a model or
//! a cue turns into (a GPU mesh, a log line, nothing) is decided by the adapter.

pub mod model_port;
pub mod sound_port;

pub use model_port::{AvatarRig, DetachedModel, ModelPort};
pub use sound_port::{SilentSoundEffects, SoundCue, SoundEffectPort};
