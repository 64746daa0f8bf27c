//! HTTP server implementation.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::signal;
use log::{debug, error, info, warn};

use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::responder::Responder;

/// Pause after a failed accept before trying again.
pub(crate) const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// A sequential HTTP server.
///
/// Connections are handled one at a time on the calling task: the next
/// `accept` only happens once the current client has been answered and
/// closed.
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The bound listening socket.
    listener: TcpListener,
    /// Builds the response for each request.
    responder: Responder,
}

impl HttpServer {
    /// Bind the listening socket described by `config`.
    ///
    /// Fails with [`Error::Bind`] if the address is unavailable, for example
    /// because the port is in use or needs privileges the process lacks.
    pub fn bind_and_listen(config: ServerConfig) -> Result<Self, Error> {
        let addr = config.addr;
        let bind_error = |source| Error::Bind { addr, source };

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        }
        .map_err(bind_error)?;
        // Every connection is closed from our side, so its TIME_WAIT entry
        // would otherwise block a quick restart on the same port.
        #[cfg(unix)]
        socket.set_reuseaddr(true).map_err(bind_error)?;
        socket.bind(addr).map_err(bind_error)?;
        let listener = socket.listen(config.backlog).map_err(bind_error)?;

        // Port 0 asks the OS to pick one, so report what we actually got.
        let port = listener.local_addr().map_err(bind_error)?.port();
        let server = Self {
            config,
            listener,
            responder: Responder::new(port),
        };
        server.display_server_info();

        Ok(server)
    }

    /// The address the listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        self.listener.local_addr().map_err(|source| Error::Bind {
            addr: self.config.addr,
            source,
        })
    }

    /// The responder used for every connection.
    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Announce the listening port and endpoints.
    fn display_server_info(&self) {
        let port = self.responder.port();
        info!("Web server started on port {port}");
        info!("Main page: http://localhost:{port}/");
        info!("API endpoint: http://localhost:{port}/api");
        info!("Press Ctrl+C to stop the server");
    }

    /// Wait for the next client connection.
    pub async fn accept_one(&self) -> Result<(TcpStream, SocketAddr), Error> {
        self.listener.accept().await.map_err(Error::Accept)
    }

    /// Serve connections until Ctrl+C (or SIGTERM on Unix) is received.
    pub async fn serve_forever(&self) {
        self.serve_until(shutdown_signal()).await
    }

    /// Serve connections until `shutdown` resolves.
    ///
    /// The shutdown future is only polled between connections; a client that
    /// is being served is always finished first.
    pub async fn serve_until(&self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // Check for shutdown signal
                _ = &mut shutdown => {
                    info!("Shutting down server...");
                    break;
                }

                // Accept new connections
                accept_result = self.accept_one() => {
                    match accept_result {
                        Ok((mut socket, addr)) => {
                            debug!("Connection from {addr}");
                            if let Err(e) = Self::handle_connection(
                                &mut socket,
                                &self.responder,
                                self.config.read_buffer_size,
                            ).await {
                                warn!("Error handling connection from {addr}: {e}");
                            }
                        }
                        Err(e) => Self::handle_accept_error(e).await,
                    }
                }
            }
        }

        info!("Server stopped");
    }

    /// Report a failed accept and pause before the next attempt.
    ///
    /// Errors such as running out of file descriptors persist for a while,
    /// and retrying immediately would spin the only thread.
    pub(crate) async fn handle_accept_error(e: Error) {
        error!("{e}");
        tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
    }

    /// Handle a single connection.
    ///
    /// Reads one request, writes one response and shuts the write side
    /// down. A client that disconnects without sending anything gets no
    /// response and is not treated as an error.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        responder: &Responder,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let request = match Self::read_request(socket, read_buffer_size).await {
            Ok(request) => request,
            Err(Error::EmptyRead) => {
                debug!("{}", Error::EmptyRead);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let response = responder.respond(&request);
        socket
            .write_all(&response.to_bytes())
            .await
            .map_err(Error::Write)?;

        if let Err(e) = socket.shutdown().await {
            debug!("Error shutting down connection: {e}");
        }

        Ok(())
    }

    /// Read a single request of at most `read_buffer_size` bytes.
    ///
    /// Anything past the buffer is left unread.
    async fn read_request(
        socket: &mut (impl AsyncRead + Unpin),
        read_buffer_size: usize,
    ) -> Result<Vec<u8>, Error> {
        let mut buf = vec![0; read_buffer_size];

        let n = socket.read(&mut buf).await.map_err(Error::Read)?;
        if n == 0 {
            return Err(Error::EmptyRead);
        }

        buf.truncate(n);
        Ok(buf)
    }
}

/// Resolve on Ctrl+C or SIGTERM.
#[cfg(unix)]
pub(crate) async fn shutdown_signal() {
    tokio::select! {
        _ = ctrl_c() => {}
        _ = terminate() => {}
    }
}

/// Resolve on Ctrl+C.
#[cfg(not(unix))]
pub(crate) async fn shutdown_signal() {
    ctrl_c().await
}

/// Resolve on SIGTERM. If the handler cannot be installed, never resolve.
#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
            info!("Received SIGTERM, initiating graceful shutdown");
        }
        Err(e) => {
            error!("Error setting up SIGTERM handler: {e}");
            std::future::pending::<()>().await
        }
    }
}

/// Resolve on Ctrl+C. If the handler cannot be installed, never resolve.
async fn ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown"),
        Err(e) => {
            error!("Error setting up Ctrl+C handler: {e}");
            std::future::pending::<()>().await
        }
    }
}
