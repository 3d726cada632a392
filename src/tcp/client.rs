use super::config::TcpClientConfig;
use crate::common::EchoClient;
use crate::{EchoError, Result};

use std::net::SocketAddr;
use async_trait::async_trait;
use bytes::BytesMut;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpStream,
    time::timeout,
};

/// TCP echo client: one message out, one echoed reply back
///
/// The reply is read until the server closes the connection or the read
/// timeout elapses, whichever comes first. The paired server closes after
/// a single exchange, so end-of-stream marks the end of the reply.
///
/// # Examples
///
/// Basic client usage:
///
/// ```no_run
/// use echopair::tcp::TcpEchoClient;
/// use echopair::common::EchoClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let addr = "127.0.0.1:65432".parse()?;
///     let mut client = TcpEchoClient::connect(addr).await?;
///
///     let response = client.echo_string("Hello, Server!").await?;
///     println!("Server echoed: {}", response);
///     Ok(())
/// }
/// ```
///
/// Sending binary data:
///
/// ```no_run
/// use echopair::tcp::TcpEchoClient;
/// use echopair::common::EchoClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let addr = "127.0.0.1:65432".parse()?;
///     let mut client = TcpEchoClient::connect(addr).await?;
///
///     let data = vec![0x01, 0x02, 0x03, 0xFF];
///     let response = client.echo(&data).await?;
///     assert_eq!(response, data);
///     Ok(())
/// }
/// ```
pub struct TcpEchoClient {
    stream: TcpStream,
    config: TcpClientConfig,
}

impl TcpEchoClient {
    /// Connects to a TCP echo server at the given address
    pub async fn connect(addr: SocketAddr) -> Result<Self> {
        Self::connect_with_config(addr, TcpClientConfig::default()).await
    }

    /// Connects with a custom client configuration
    pub async fn connect_with_config(addr: SocketAddr, config: TcpClientConfig) -> Result<Self> {
        let stream = timeout(config.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| EchoError::Timeout(format!("Connection to {} timed out", addr)))?
            .map_err(|e| EchoError::Config(format!("Failed to connect to {}: {}", addr, e)))?;
        Ok(Self { stream, config })
    }
}

#[async_trait]
impl EchoClient for TcpEchoClient {
    /// Sends data to the TCP echo server and returns the echoed response.
    /// Reads in a loop until the connection is closed or a read times out.
    async fn echo(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() {
            // The server never echoes an empty read, so there is nothing to wait for
            return Ok(Vec::new());
        }

        self.stream.write_all(data).await.map_err(EchoError::Tcp)?;
        self.stream.flush().await.map_err(EchoError::Tcp)?;

        let mut response = BytesMut::with_capacity(self.config.buffer_size);
        let mut buffer = vec![0u8; self.config.buffer_size];
        loop {
            match timeout(self.config.read_timeout, self.stream.read(&mut buffer)).await {
                Ok(Ok(0)) => break, // Connection closed
                Ok(Ok(n)) => response.extend_from_slice(&buffer[..n]),
                Ok(Err(e)) => return Err(EchoError::Tcp(e)),
                Err(_) => break, // Timeout, assume done
            }
        }
        Ok(response.to_vec())
    }
}
