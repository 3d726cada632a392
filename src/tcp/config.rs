use std::net::SocketAddr;
use std::time::Duration;

/// Configuration for the TCP echo server
///
/// # Examples
///
/// ```
/// use echopair::tcp::TcpConfig;
/// use std::time::Duration;
///
/// let config = TcpConfig {
///     bind_addr: "127.0.0.1:65432".parse().unwrap(),
///     buffer_size: 1024,
///     read_timeout: Duration::from_secs(30),
///     write_timeout: Duration::from_secs(30),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct TcpConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Buffer size for the single per-connection read
    pub buffer_size: usize,
    /// Read timeout for connections
    pub read_timeout: Duration,
    /// Write timeout for connections
    pub write_timeout: Duration,
}

impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:0".parse().unwrap(), // Use port 0 for testing
            buffer_size: 1024,
            read_timeout: Duration::from_secs(30),
            write_timeout: Duration::from_secs(30),
        }
    }
}

/// Configuration for the TCP echo client
///
/// # Examples
///
/// ```
/// use echopair::tcp::TcpClientConfig;
/// use std::time::Duration;
///
/// let config = TcpClientConfig {
///     connect_timeout: Duration::from_secs(10),
///     read_timeout: Duration::from_millis(200),
///     buffer_size: 1024,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct TcpClientConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// How long to wait for more reply bytes before assuming the echo is complete
    pub read_timeout: Duration,
    /// Buffer size for reading the reply
    pub buffer_size: usize,
}

impl Default for TcpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_millis(200),
            buffer_size: 1024,
        }
    }
}
