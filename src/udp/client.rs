use super::config::UdpClientConfig;
use crate::common::EchoClient;
use crate::{EchoError, Result};

use std::net::SocketAddr;
use async_trait::async_trait;
use tokio::{net::UdpSocket, time::timeout};

/// UDP echo client: one datagram out, one reply datagram back
///
/// # Examples
///
/// Basic client usage:
///
/// ```no_run
/// use echopair::udp::UdpEchoClient;
/// use echopair::common::EchoClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let addr = "127.0.0.1:65433".parse()?;
///     let mut client = UdpEchoClient::connect(addr).await?;
///
///     let response = client.echo_string("Hello, Server!").await?;
///     println!("Server echoed: {}", response);
///     Ok(())
/// }
/// ```
///
/// Observing the responding address:
///
/// ```no_run
/// use echopair::udp::UdpEchoClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let addr = "127.0.0.1:65433".parse()?;
///     let mut client = UdpEchoClient::connect(addr).await?;
///
///     let (reply, from) = client.echo_from(b"hello").await?;
///     assert_eq!(reply, b"hello");
///     assert_eq!(from, addr);
///     Ok(())
/// }
/// ```
pub struct UdpEchoClient {
    socket: UdpSocket,
    server_addr: SocketAddr,
    config: UdpClientConfig,
}

impl UdpEchoClient {
    /// Creates a client talking to a UDP echo server at the given address
    pub async fn connect(server_addr: SocketAddr) -> Result<Self> {
        Self::connect_with_config(server_addr, UdpClientConfig::default()).await
    }

    /// Creates a client with a custom configuration
    pub async fn connect_with_config(
        server_addr: SocketAddr,
        config: UdpClientConfig,
    ) -> Result<Self> {
        // Bind to any available port
        let socket = UdpSocket::bind("127.0.0.1:0")
            .await
            .map_err(|e| EchoError::Config(format!("Failed to bind UDP socket: {}", e)))?;

        Ok(Self {
            socket,
            server_addr,
            config,
        })
    }

    /// Sends one datagram and returns the reply payload together with the
    /// address it was sent from
    pub async fn echo_from(&mut self, data: &[u8]) -> Result<(Vec<u8>, SocketAddr)> {
        self.socket
            .send_to(data, self.server_addr)
            .await
            .map_err(EchoError::Udp)?;

        let mut buffer = vec![0; self.config.buffer_size];
        let (n, from) = timeout(self.config.read_timeout, self.socket.recv_from(&mut buffer))
            .await
            .map_err(|_| EchoError::Timeout("UDP receive timeout".to_string()))?
            .map_err(EchoError::Udp)?;

        Ok((buffer[..n].to_vec(), from))
    }
}

#[async_trait]
impl EchoClient for UdpEchoClient {
    /// Sends data to the UDP echo server and returns the echoed response.
    /// Waits for a single response datagram.
    async fn echo(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let (payload, _) = self.echo_from(data).await?;
        Ok(payload)
    }
}
