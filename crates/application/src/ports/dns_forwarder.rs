use async_trait::async_trait;
use palisade_dns_domain::DomainError;

/// Application-layer port for forwarding a query to the configured upstream
/// resolver over UDP.
///
/// Implementations own the 5-second deadline internally; callers distinguish
/// timeout from other transport failures via `DomainError::QueryTimeout`.
#[async_trait]
pub trait DnsForwarderPort: Send + Sync {
    /// Forward the raw wire-format `query` to `upstream` (`ip:port`) and
    /// return the raw wire-format response.
    async fn forward(&self, query: &[u8], upstream: &str) -> Result<Vec<u8>, DomainError>;
}
