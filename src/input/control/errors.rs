use std::io;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("failed to bind control listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to read bound address of control listener: {0}")]
    LocalAddr(#[source] io::Error),

    #[error("failed to start control ingestion thread: {0}")]
    Spawn(#[source] io::Error),
}
