use bytemuck::{Pod, Zeroable};
use std::mem::size_of;

pub const PAYLOAD_SIZE: usize = size_of::<ControlPayload>();

/// One control record as sent by the remote controller: six packed native-endian `i32`s.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct ControlPayload {
    pub target_roll: i32,
    pub target_pitch: i32,
    pub game_state: i32,
    pub left_wing_angle: i32,
    pub right_wing_angle: i32,
    pub body_height: i32,
}

impl ControlPayload {
    /// Decodes exactly one record. Any other length is rejected.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        bytemuck::try_pod_read_unaligned(bytes).ok()
    }

    /// The last whole record of a read that carried one or more records back to back.
    #[must_use]
    pub fn latest_in(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() % PAYLOAD_SIZE != 0 {
            return None;
        }

        Self::from_bytes(&bytes[bytes.len() - PAYLOAD_SIZE..])
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
