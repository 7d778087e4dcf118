use hickory_server::server::RequestHandler;
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

/// TCP connections idle longer than this are dropped.
const TCP_TIMEOUT: Duration = Duration::from_secs(10);

/// Bind UDP and TCP listeners and serve queries until the process stops.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: impl RequestHandler,
) -> anyhow::Result<()> {
    let udp_socket = UdpSocket::bind(bind_addr).await?;
    let tcp_listener = TcpListener::bind(bind_addr).await?;
    info!(bind_address = %bind_addr, "DNS server listening on UDP and TCP");

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, TCP_TIMEOUT);

    info!("DNS server ready to accept queries");
    server.block_until_done().await?;

    Ok(())
}
