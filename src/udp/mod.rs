pub mod client;
pub mod config;
pub mod server;
pub mod tests;

pub use client::UdpEchoClient;
pub use config::{UdpClientConfig, UdpConfig};
pub use server::UdpEchoServer;
