use async_trait::async_trait;
use palisade_dns_domain::DomainError;
use std::collections::HashSet;

/// Application-layer port for the Blocklist Fetcher.
///
/// Fetching and parsing are bundled behind one call because the parse rules
/// are a property of the feed format the fetcher downloads, not something
/// callers need to vary independently.
#[async_trait]
pub trait BlocklistFetcherPort: Send + Sync {
    /// Download `url` and parse it as a hosts-format feed, returning the
    /// resulting set of normalized domains. Never mutates any existing
    /// blocklist; the caller decides whether and how to publish the result.
    async fn fetch(&self, url: &str) -> Result<HashSet<String>, DomainError>;
}
