//! TCP Server
//!
//! Accepts connections and hands each to its own thread.

use std::io::ErrorKind;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::{AgoraError, Result};

use super::Connection;

/// How long the accept loop sleeps when no connection is pending
const ACCEPT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Cloneable handle that stops a running server
#[derive(Debug, Clone)]
pub struct ShutdownHandle(Arc<AtomicBool>);

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_shutdown(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// TCP server for Agora
pub struct Server {
    config: Config,
    dispatcher: Arc<Dispatcher>,
    listener: TcpListener,
    local_addr: SocketAddr,
    shutdown: ShutdownHandle,
    active: Arc<AtomicUsize>,
}

impl Server {
    /// Bind the listen address from `config`
    pub fn bind(config: Config, dispatcher: Arc<Dispatcher>) -> Result<Self> {
        config.validate()?;

        let listener = TcpListener::bind(&config.listen_addr).map_err(|e| {
            AgoraError::Network(format!("failed to bind {}: {}", config.listen_addr, e))
        })?;
        listener.set_nonblocking(true)?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Listening on {}", local_addr);

        Ok(Self {
            config,
            dispatcher,
            listener,
            local_addr,
            shutdown: ShutdownHandle(Arc::new(AtomicBool::new(false))),
            active: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Address actually bound (useful with port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Number of connections currently being served
    pub fn active_connections(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Accept connections until shut down (blocking)
    pub fn run(&self) -> Result<()> {
        while !self.shutdown.is_shutdown() {
            match self.listener.accept() {
                Ok((stream, peer)) => self.admit(stream, peer),
                Err(ref e) if e.kind() == ErrorKind::WouldBlock => {
                    thread::sleep(ACCEPT_POLL_INTERVAL);
                }
                Err(e) => {
                    tracing::warn!("Accept failed: {}", e);
                }
            }
        }

        tracing::info!("Server on {} shutting down", self.local_addr);
        Ok(())
    }

    /// Spawn a handler for an accepted stream, or refuse it at capacity
    fn admit(&self, stream: TcpStream, peer: SocketAddr) {
        if self.active.load(Ordering::SeqCst) >= self.config.max_connections {
            tracing::warn!("Refusing {}: {} connections open", peer, self.config.max_connections);
            return;
        }

        let slot = ConnectionSlot::acquire(Arc::clone(&self.active));
        let dispatcher = Arc::clone(&self.dispatcher);
        let read_ms = self.config.read_timeout_ms;
        let write_ms = self.config.write_timeout_ms;

        let spawned = thread::Builder::new()
            .name(format!("agora-conn-{}", peer))
            .spawn(move || {
                let _slot = slot;
                if let Err(e) = serve(stream, dispatcher, read_ms, write_ms) {
                    tracing::debug!("Connection {} ended with error: {}", peer, e);
                }
            });

        if let Err(e) = spawned {
            tracing::warn!("Failed to spawn handler for {}: {}", peer, e);
        }
    }
}

fn serve(stream: TcpStream, dispatcher: Arc<Dispatcher>, read_ms: u64, write_ms: u64) -> Result<()> {
    // Accepted sockets may inherit the listener's non-blocking mode
    stream.set_nonblocking(false)?;
    let mut connection = Connection::new(stream, dispatcher)?;
    connection.set_timeouts(read_ms, write_ms)?;
    connection.handle()
}

/// Counts an open connection until dropped
struct ConnectionSlot(Arc<AtomicUsize>);

impl ConnectionSlot {
    fn acquire(active: Arc<AtomicUsize>) -> Self {
        active.fetch_add(1, Ordering::SeqCst);
        Self(active)
    }
}

impl Drop for ConnectionSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
