use async_trait::async_trait;
use palisade_dns_domain::QueryEvent;

/// Point-in-time counters, copied out from behind the stats lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stats {
    pub total_queries: u64,
    pub blocked_queries: u64,
}

/// Application-layer port for the Stats & Log Ring.
///
/// A single mutex guards both the counters and the ring in the reference
/// infrastructure adapter; readers copy data out under the lock rather than
/// holding a reference across the call.
#[async_trait]
pub trait StatsLogPort: Send + Sync {
    /// Record a query's arrival: increments `total_queries` and appends the
    /// rendered arrival line to the ring, evicting the oldest entry if the
    /// ring is full. Called once per query, before the block/forward
    /// decision is known.
    fn record_arrival(&self, line: String);

    /// Record a query's outcome: appends the rendered outcome line to the
    /// ring (evicting oldest if full) and increments `blocked_queries` when
    /// the outcome is a blocked one. Does not touch `total_queries` — that
    /// was already incremented by the matching `record_arrival` call.
    fn record_outcome(&self, event: QueryEvent);

    fn read_stats(&self) -> Stats;

    /// Newest-first copy of the rendered ring, capped at its capacity (100).
    fn read_logs(&self) -> Vec<String>;
}
