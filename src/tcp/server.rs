use super::config::TcpConfig;
use crate::common::EchoServer;
use crate::{EchoError, Result};

use std::net::SocketAddr;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    signal,
    time::timeout,
};
use tracing::{error, info, warn};

/// TCP echo server that services one connection at a time
///
/// Connections are handled serially on the accept loop: a second client
/// queues in the accept backlog until the current connection is closed.
/// Each connection gets a single bounded read; whatever that read returns
/// is written back verbatim and the connection is then closed. Data beyond
/// one buffer is not reassembled.
///
/// # Examples
///
/// Basic server setup and running:
///
/// ```no_run
/// use echopair::tcp::{TcpConfig, TcpEchoServer};
/// use echopair::common::EchoServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = TcpConfig {
///         bind_addr: "127.0.0.1:65432".parse()?,
///         ..Default::default()
///     };
///
///     let server = TcpEchoServer::new(config);
///     server.run().await?;
///     Ok(())
/// }
/// ```
///
/// Server with graceful shutdown:
///
/// ```no_run
/// use echopair::tcp::{TcpConfig, TcpEchoServer};
/// use echopair::common::EchoServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = TcpEchoServer::new(TcpConfig::default());
///     let shutdown_signal = server.shutdown_signal();
///
///     let server_handle = tokio::spawn(async move {
///         server.run().await
///     });
///
///     // Do other work...
///
///     let _ = shutdown_signal.send(());
///     server_handle.await??;
///     Ok(())
/// }
/// ```
pub struct TcpEchoServer {
    config: TcpConfig,
    shutdown_signal: Arc<tokio::sync::broadcast::Sender<()>>,
}

impl TcpEchoServer {
    /// Creates a new TCP echo server with the given configuration
    pub fn new(config: TcpConfig) -> Self {
        let (shutdown_signal, _) = tokio::sync::broadcast::channel(1);
        Self {
            config,
            shutdown_signal: Arc::new(shutdown_signal),
        }
    }

    /// Services a single accepted connection: one bounded read, one echo
    async fn serve_connection(
        stream: &mut TcpStream,
        addr: SocketAddr,
        buffer: &mut [u8],
        config: &TcpConfig,
    ) -> Result<()> {
        let n = match timeout(config.read_timeout, stream.read(buffer)).await {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(EchoError::Tcp(e)),
            Err(_) => {
                warn!(%addr, "Read timeout");
                return Ok(());
            }
        };

        if n == 0 {
            // Peer closed before sending anything; nothing to echo
            info!(%addr, "Client closed connection without data");
            return Ok(());
        }

        let preview = String::from_utf8_lossy(&buffer[..n]);
        info!(%addr, size = n, preview = %preview, "Received data");

        match timeout(config.write_timeout, stream.write_all(&buffer[..n])).await {
            Ok(Ok(())) => {
                stream.flush().await.map_err(EchoError::Tcp)?;
                info!(%addr, size = n, "Echoed data");
            }
            Ok(Err(e)) => return Err(EchoError::Tcp(e)),
            Err(_) => warn!(%addr, "Write timeout"),
        }

        Ok(())
    }
}

#[async_trait]
impl EchoServer for TcpEchoServer {
    /// Starts the TCP echo server and listens for connections
    async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await.map_err(|e| {
            EchoError::Config(format!("Failed to bind to {}: {}", self.config.bind_addr, e))
        })?;

        info!(address = %self.config.bind_addr, "TCP echo server listening");

        let mut buffer = vec![0; self.config.buffer_size];
        let mut shutdown_rx = self.shutdown_signal.subscribe();

        loop {
            tokio::select! {
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((mut stream, addr)) => {
                            info!(%addr, "Accepted connection");
                            if let Err(e) =
                                Self::serve_connection(&mut stream, addr, &mut buffer, &self.config).await
                            {
                                error!(%addr, error = %e, "Error handling connection");
                            }
                            // Dropping the stream closes the connection
                            drop(stream);
                            info!(%addr, "Connection closed");
                        }
                        Err(e) => {
                            error!(error = %e, "Failed to accept connection");
                        }
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("Received shutdown signal, stopping server");
                    break;
                }
                _ = shutdown_rx.recv() => {
                    info!("Received internal shutdown signal, stopping server");
                    break;
                }
            }
        }

        info!("TCP echo server stopped");
        Ok(())
    }

    /// Returns a shutdown signal sender that can be used to gracefully shutdown the server
    fn shutdown_signal(&self) -> tokio::sync::broadcast::Sender<()> {
        self.shutdown_signal.as_ref().clone()
    }
}
