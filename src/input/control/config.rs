use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const DEFAULT_CONTROL_PORT: u16 = 2300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    pub bind_addr: SocketAddr,
    /// Size of each read from the peer. Reads are never split across calls, so this
    /// bounds how many coalesced records one read can carry.
    pub read_buffer_bytes: usize,
}

impl ChannelConfig {
    #[must_use]
    pub fn with_bind_addr(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            ..Self::default()
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        let bind_addr = SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, DEFAULT_CONTROL_PORT);

        Self {
            bind_addr: SocketAddr::V4(bind_addr),
            read_buffer_bytes: 512,
        }
    }
}
