//! Ingestion of control payloads from the remote controller.
//!
//! A background reader owns the blocking socket reads and hands each complete record
//! to the frame loop through [`LatestPayloadCell`].

pub mod cell;
pub mod channel;
pub mod config;
pub mod errors;
pub mod payload;

pub use cell::LatestPayloadCell;
pub use channel::{ControlChannel, ControlListener, publish_read};
pub use config::ChannelConfig;
pub use errors::ChannelError;
pub use payload::{ControlPayload, PAYLOAD_SIZE};
