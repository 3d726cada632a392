use std::net::SocketAddr;
use std::time::Duration;

/// Configuration for the UDP echo server
///
/// # Examples
///
/// ```
/// use echopair::udp::UdpConfig;
/// use std::time::Duration;
///
/// let config = UdpConfig {
///     bind_addr: "127.0.0.1:65433".parse().unwrap(),
///     buffer_size: 1024,
///     read_timeout: Duration::from_secs(30),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct UdpConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Buffer size for receiving datagrams
    pub buffer_size: usize,
    /// Idle receive timeout; elapsing logs a warning and the loop continues
    pub read_timeout: Duration,
}

impl Default for UdpConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:0".parse().unwrap(), // Use port 0 for testing
            buffer_size: 1024,
            read_timeout: Duration::from_secs(30),
        }
    }
}

/// Configuration for the UDP echo client
///
/// # Examples
///
/// ```
/// use echopair::udp::UdpClientConfig;
/// use std::time::Duration;
///
/// let config = UdpClientConfig {
///     read_timeout: Duration::from_secs(30),
///     buffer_size: 1024,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct UdpClientConfig {
    /// How long to wait for the reply datagram
    pub read_timeout: Duration,
    /// Buffer size for receiving the reply
    pub buffer_size: usize,
}

impl Default for UdpClientConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(30),
            buffer_size: 1024,
        }
    }
}
