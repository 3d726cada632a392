use echopair::common::{EchoClient, EchoServer};
use echopair::tcp::{TcpConfig, TcpEchoClient, TcpEchoServer};
use echopair::udp::{UdpConfig, UdpEchoClient, UdpEchoServer};

use color_eyre::eyre::{Result, WrapErr};
use std::io::Write;
use std::net::SocketAddr;
use tracing::info;

const DEFAULT_TCP_ADDR: &str = "127.0.0.1:65432";
const DEFAULT_UDP_ADDR: &str = "127.0.0.1:65433";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("echopair=info")
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Default to the TCP server if no role specified
    let role = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "tcp-server".to_string());

    match role.as_str() {
        "tcp-server" => {
            let config = TcpConfig {
                bind_addr: parse_addr(args.get(2), DEFAULT_TCP_ADDR)?,
                ..Default::default()
            };

            info!(address = %config.bind_addr, "Starting TCP echo server");

            let server = TcpEchoServer::new(config);
            server.run().await.wrap_err("Failed to run TCP echo server")?;
        }
        "tcp-client" => {
            let addr = parse_addr(args.get(2), DEFAULT_TCP_ADDR)?;
            let message = read_message(args.get(3))?;

            let mut client = TcpEchoClient::connect(addr)
                .await
                .wrap_err_with(|| format!("Failed to connect to TCP echo server at {addr}"))?;
            info!(%addr, "Connected to TCP echo server");

            let response = client
                .echo_string(&message)
                .await
                .wrap_err("TCP echo exchange failed")?;
            info!(%addr, reply = %response, "Server echoed");
            println!("{response}");
        }
        "udp-server" => {
            let config = UdpConfig {
                bind_addr: parse_addr(args.get(2), DEFAULT_UDP_ADDR)?,
                ..Default::default()
            };

            info!(address = %config.bind_addr, "Starting UDP echo server");

            let server = UdpEchoServer::new(config);
            server.run().await.wrap_err("Failed to run UDP echo server")?;
        }
        "udp-client" => {
            let addr = parse_addr(args.get(2), DEFAULT_UDP_ADDR)?;
            let message = read_message(args.get(3))?;

            let mut client = UdpEchoClient::connect(addr)
                .await
                .wrap_err("Failed to create UDP echo client")?;
            info!(%addr, "Sending datagram to UDP echo server");

            let (reply, from) = client
                .echo_from(message.as_bytes())
                .await
                .wrap_err("UDP echo exchange failed")?;
            let reply = String::from_utf8(reply).wrap_err("Reply was not valid UTF-8")?;
            info!(%from, reply = %reply, "Server echoed");
            println!("{reply}");
        }
        _ => {
            eprintln!("Usage: {} [tcp-server|tcp-client|udp-server|udp-client] [addr] [message]", args[0]);
            eprintln!("  tcp-server|udp-server: run an echo server on addr (defaults: {DEFAULT_TCP_ADDR} / {DEFAULT_UDP_ADDR})");
            eprintln!("  tcp-client|udp-client: send one message to addr and print the echoed reply");
            eprintln!("  message: taken from the command line, or prompted for on stdin");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} tcp-server                       # echo server on {DEFAULT_TCP_ADDR}", args[0]);
            eprintln!("  {} tcp-client {DEFAULT_TCP_ADDR} ping  # one TCP exchange", args[0]);
            eprintln!("  {} udp-server 127.0.0.1:9090        # echo server on a custom port", args[0]);
            eprintln!("  {} udp-client {DEFAULT_UDP_ADDR} hello # one UDP exchange", args[0]);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn parse_addr(arg: Option<&String>, default: &str) -> Result<SocketAddr> {
    let text = arg.map(String::as_str).unwrap_or(default);
    text.parse()
        .wrap_err_with(|| format!("Invalid socket address: {text}"))
}

/// Takes the message from the command line, or prompts for one line on stdin
fn read_message(arg: Option<&String>) -> Result<String> {
    if let Some(message) = arg {
        return Ok(message.clone());
    }

    print!("Enter message: ");
    std::io::stdout().flush().wrap_err("Failed to flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .wrap_err("Failed to read message from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
