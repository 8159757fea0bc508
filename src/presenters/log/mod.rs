//! Headless adapters for the scene ports: models and sounds that report to the log.

pub mod model;
pub mod sound;

pub use model::logged_rig;
pub use sound::LoggedSoundEffects;
