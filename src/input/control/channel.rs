use crate::input::control::cell::LatestPayloadCell;
use crate::input::control::config::ChannelConfig;
use crate::input::control::errors::ChannelError;
use crate::input::control::payload::{ControlPayload, PAYLOAD_SIZE};
use std::io::{ErrorKind, Read};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, trace, warn};

/// A bound control endpoint that has not yet accepted its peer.
pub struct ControlListener {
    listener: TcpListener,
    config: ChannelConfig,
}

impl ControlListener {
    pub fn bind(config: ChannelConfig) -> Result<Self, ChannelError> {
        let listener = TcpListener::bind(config.bind_addr).map_err(|source| ChannelError::Bind {
            addr: config.bind_addr,
            source,
        })?;

        let listener = Self { listener, config };
        let addr = listener.local_addr()?;
        info!(%addr, "control listener bound");

        Ok(listener)
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ChannelError> {
        self.listener.local_addr().map_err(ChannelError::LocalAddr)
    }

    /// Blocks until the single controller peer connects.
    ///
    /// A failed accept is logged and yields a channel without a peer, whose payload
    /// stays at the zeroed default.
    #[must_use]
    pub fn accept(self) -> ControlChannel {
        let peer = match self.listener.accept() {
            Ok((stream, peer_addr)) => {
                info!(%peer_addr, "control peer connected");
                Some(stream)
            }
            Err(error) => {
                warn!(%error, "failed to accept control peer");
                None
            }
        };

        ControlChannel::new(Some(self.listener), peer, self.config)
    }
}

struct SharedState {
    latest: LatestPayloadCell,
    shutdown: AtomicBool,
}

/// Connection to the remote controller plus the background reader that feeds
/// [`ControlChannel::latest_payload`].
pub struct ControlChannel {
    shared: Arc<SharedState>,
    listener: Option<TcpListener>,
    peer: Option<TcpStream>,
    reader: Option<JoinHandle<()>>,
    ingestion_requested: bool,
    read_buffer_bytes: usize,
}

impl ControlChannel {
    /// Binds the endpoint and waits for the controller to connect.
    pub fn open(config: ChannelConfig) -> Result<Self, ChannelError> {
        Ok(ControlListener::bind(config)?.accept())
    }

    fn new(
        listener: Option<TcpListener>,
        peer: Option<TcpStream>,
        config: ChannelConfig,
    ) -> Self {
        Self {
            shared: Arc::new(SharedState {
                latest: LatestPayloadCell::default(),
                shutdown: AtomicBool::new(false),
            }),
            listener,
            peer,
            reader: None,
            ingestion_requested: false,
            read_buffer_bytes: config.read_buffer_bytes.max(PAYLOAD_SIZE),
        }
    }

    /// Most recently received payload, or the zeroed default if none has arrived.
    ///
    /// The first call starts the background reader. Never waits on the network.
    pub fn latest_payload(&mut self) -> ControlPayload {
        if !self.ingestion_requested {
            self.ingestion_requested = true;
            if let Err(error) = self.start_ingestion() {
                warn!(%error, "control payloads will not be received");
            }
        }

        self.shared.latest.snapshot()
    }

    #[must_use]
    pub fn has_peer(&self) -> bool {
        self.peer.is_some()
    }

    #[must_use]
    pub fn is_ingesting(&self) -> bool {
        self.reader
            .as_ref()
            .is_some_and(|reader| !reader.is_finished())
    }

    /// Number of payloads received since the channel was opened.
    #[must_use]
    pub fn payloads_received(&self) -> u64 {
        self.shared.latest.publish_count()
    }

    /// Closes both sockets, then waits for the reader to exit.
    ///
    /// The peer is shut down first so a reader blocked in `read` wakes up.
    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);

        if let Some(peer) = self.peer.take() {
            let _ = peer.shutdown(Shutdown::Both);
        }
        self.listener = None;

        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
    }

    fn start_ingestion(&mut self) -> Result<(), ChannelError> {
        let Some(peer) = self.peer.as_ref() else {
            return Ok(());
        };

        let stream = peer.try_clone().map_err(ChannelError::Spawn)?;
        let shared = Arc::clone(&self.shared);
        let buffer_bytes = self.read_buffer_bytes;

        let reader = thread::Builder::new()
            .name("control-ingest".to_string())
            .spawn(move || ingest(stream, &shared, buffer_bytes))
            .map_err(ChannelError::Spawn)?;

        self.reader = Some(reader);
        Ok(())
    }
}

impl Drop for ControlChannel {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Publishes the last whole record carried by one read. Returns whether anything
/// was published.
pub fn publish_read(cell: &LatestPayloadCell, bytes: &[u8]) -> bool {
    match ControlPayload::latest_in(bytes) {
        Some(payload) => {
            trace!(?payload, "control payload received");
            cell.publish(payload);
            true
        }
        None => {
            debug!(bytes = bytes.len(), "ignoring read that is not a whole record");
            false
        }
    }
}

fn ingest(mut stream: TcpStream, shared: &SharedState, buffer_bytes: usize) {
    info!("control ingestion started");
    let mut buffer = vec![0_u8; buffer_bytes];

    while !shared.shutdown.load(Ordering::Acquire) {
        match stream.read(&mut buffer) {
            Ok(0) => {
                info!("control peer closed the connection");
                break;
            }
            Ok(read) => {
                publish_read(&shared.latest, &buffer[..read]);
            }
            Err(error) if error.kind() == ErrorKind::Interrupted => {}
            Err(error) => {
                if !shared.shutdown.load(Ordering::Acquire) {
                    warn!(%error, "control peer read failed");
                }
                break;
            }
        }
    }

    info!("control ingestion stopped");
}
