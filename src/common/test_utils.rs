use crate::common::EchoServer;
use crate::{EchoError, Result, TcpConfig, TcpEchoServer, UdpConfig, UdpEchoServer};
use std::net::SocketAddr;
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Spawns a TCP echo server on an ephemeral port for integration tests
///
/// Returns the server task handle, the address the server is bound to, and
/// the shutdown sender so tests can stop the server deterministically.
pub async fn spawn_tcp_test_server()
-> Result<(JoinHandle<Result<()>>, SocketAddr, broadcast::Sender<()>)> {
    spawn_tcp_test_server_with_config(TcpConfig::default()).await
}

/// Spawns a TCP echo server with a custom configuration on an ephemeral port
pub async fn spawn_tcp_test_server_with_config(
    mut config: TcpConfig,
) -> Result<(JoinHandle<Result<()>>, SocketAddr, broadcast::Sender<()>)> {
    // First bind to get the actual address
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|e| EchoError::Config(format!("Failed to bind listener: {e}")))?;
    let addr = listener
        .local_addr()
        .map_err(|e| EchoError::Config(format!("Failed to get local address: {e}")))?;
    drop(listener); // Close the listener so the server can bind to the same address

    config.bind_addr = addr;
    let server = TcpEchoServer::new(config);
    let shutdown = server.shutdown_signal();

    let server_handle = tokio::spawn(async move { server.run().await });

    Ok((server_handle, addr, shutdown))
}

/// Spawns a UDP echo server on an ephemeral port for integration tests
pub async fn spawn_udp_test_server()
-> Result<(JoinHandle<Result<()>>, SocketAddr, broadcast::Sender<()>)> {
    spawn_udp_test_server_with_config(UdpConfig::default()).await
}

/// Spawns a UDP echo server with a custom configuration on an ephemeral port
pub async fn spawn_udp_test_server_with_config(
    mut config: UdpConfig,
) -> Result<(JoinHandle<Result<()>>, SocketAddr, broadcast::Sender<()>)> {
    let socket = UdpSocket::bind("127.0.0.1:0")
        .await
        .map_err(|e| EchoError::Config(format!("Failed to bind socket: {e}")))?;
    let addr = socket
        .local_addr()
        .map_err(|e| EchoError::Config(format!("Failed to get local address: {e}")))?;
    drop(socket); // Free the port so the server can bind to the same address

    config.bind_addr = addr;
    let server = UdpEchoServer::new(config);
    let shutdown = server.shutdown_signal();

    let server_handle = tokio::spawn(async move { server.run().await });

    Ok((server_handle, addr, shutdown))
}
