use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("DNS parse error: {0}")]
    DnsParseError(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Upstream transport error: {0}")]
    UpstreamError(String),

    #[error("Blocklist fetch error: {0}")]
    BlocklistFetchError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
