//! Palisade DNS Infrastructure Layer
//!
//! Concrete adapters for the ports the application layer defines, plus the
//! DNS request path itself, which is wire-format-heavy enough to
//! live here rather than behind a use case.
pub mod blocklist;
pub mod dns;
pub mod list_store;
pub mod stats;

pub use blocklist::HttpBlocklistFetcher;
pub use dns::{DnsEngine, UdpForwarder};
pub use list_store::ArcSwapListStore;
pub use stats::MutexStatsLog;
