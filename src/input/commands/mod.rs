pub mod errors;
pub mod run_host;

pub use errors::HostError;
pub use run_host::{RunHostCommand, apply_payload, run_frames};
