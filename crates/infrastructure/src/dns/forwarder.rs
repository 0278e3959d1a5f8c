use async_trait::async_trait;
use palisade_dns_application::ports::DnsForwarderPort;
use palisade_dns_domain::DomainError;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

const FORWARD_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_RESPONSE_SIZE: usize = 4096;

/// Forwards queries to the configured upstream resolver over UDP, binding a
/// fresh ephemeral socket per request.
pub struct UdpForwarder;

impl UdpForwarder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UdpForwarder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsForwarderPort for UdpForwarder {
    async fn forward(&self, query: &[u8], upstream: &str) -> Result<Vec<u8>, DomainError> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| DomainError::UpstreamError(format!("bind failed: {e}")))?;

        tokio::time::timeout(FORWARD_TIMEOUT, socket.send_to(query, upstream))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::UpstreamError(e.to_string()))?;

        let mut buf = vec![0u8; MAX_RESPONSE_SIZE];
        let (len, from) = tokio::time::timeout(FORWARD_TIMEOUT, socket.recv_from(&mut buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::UpstreamError(e.to_string()))?;

        debug!(upstream, bytes = len, from = %from, "Received upstream response");
        buf.truncate(len);
        Ok(buf)
    }
}
