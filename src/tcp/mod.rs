pub mod client;
pub mod config;
pub mod server;

pub use client::TcpEchoClient;
pub use config::{TcpClientConfig, TcpConfig};
pub use server::TcpEchoServer;
