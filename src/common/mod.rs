//! Common traits and test helpers used across the echopair library
//!
//! This module contains the core traits that define the interface
//! for echo servers and clients.

pub mod test_utils;
pub mod traits;

pub use test_utils::{spawn_tcp_test_server, spawn_udp_test_server};
pub use traits::{EchoClient, EchoServer};
