//! Palisade DNS Application Layer
//!
//! Ports define the seams the infrastructure layer implements; use cases
//! compose ports into the operations the dashboard API exposes. The DNS
//! request path itself (C4/C5) is infrastructure, not a use case here — it
//! is wire-format-heavy and has no dashboard-facing orchestration to extract.
pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::{EditableList, StatsView};
pub use ports::{
    BlocklistFetcherPort, DnsForwarderPort, ListSnapshot, ListStorePort, Stats, StatsLogPort,
};
pub use use_cases::{GetLogsUseCase, GetStatsUseCase, UpdateListUseCase};
