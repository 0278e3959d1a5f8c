use palisade_dns_infrastructure::DnsEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{error, info, warn};

const RECV_BUFFER_SIZE: usize = 4096;

/// Binds the DNS listener. A bind failure (e.g. missing permission for a
/// low port) is fatal and must be reported clearly by the caller.
pub async fn bind(bind_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    UdpSocket::bind(bind_addr)
        .await
        .map_err(|err| anyhow::anyhow!("failed to bind DNS socket on {bind_addr}: {err}"))
}

/// Runs the receive loop on an already-bound socket, dispatching each
/// datagram to its own task so a slow upstream forward never stalls other
/// queries. Transient receive errors are logged and the loop continues.
pub async fn serve(socket: UdpSocket, engine: Arc<DnsEngine>) -> anyhow::Result<()> {
    let local_addr = socket.local_addr()?;
    let socket = Arc::new(socket);
    info!(bind_address = %local_addr, "DNS server listening");

    let mut buf = [0u8; RECV_BUFFER_SIZE];
    loop {
        let (len, client_addr) = match socket.recv_from(&mut buf).await {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "UDP receive error, continuing");
                continue;
            }
        };

        let datagram = buf[..len].to_vec();
        let engine = engine.clone();
        let socket = socket.clone();

        tokio::spawn(async move {
            if let Some(response) = engine.process_datagram(&datagram, client_addr.ip()).await {
                if let Err(err) = socket.send_to(&response, client_addr).await {
                    error!(client = %client_addr, error = %err, "Failed to send DNS response");
                }
            }
        });
    }
}

/// Binds and serves in one call; the common case for production startup.
pub async fn start_dns_server(bind_addr: SocketAddr, engine: Arc<DnsEngine>) -> anyhow::Result<()> {
    let socket = bind(bind_addr).await?;
    serve(socket, engine).await
}
