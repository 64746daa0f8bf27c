//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The number of pending connections the listening socket queues.
    pub backlog: u32,
    /// The read buffer size. Longer requests are truncated.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            backlog: 3,
            read_buffer_size: 1024,
        }
    }
}
