use async_trait::async_trait;
use palisade_dns_application::ports::{Stats, StatsLogPort};
use palisade_dns_domain::QueryEvent;
use std::collections::VecDeque;
use std::sync::Mutex;

const RING_CAPACITY: usize = 100;

struct Inner {
    total_queries: u64,
    blocked_queries: u64,
    ring: VecDeque<String>,
}

impl Inner {
    fn push(&mut self, line: String) {
        if self.ring.len() == RING_CAPACITY {
            self.ring.pop_front();
        }
        self.ring.push_back(line);
    }
}

/// Counters and log ring behind a single mutex.
///
/// A single lock covers both pieces of state so that a reader's copy of
/// `total_queries` is always consistent with the ring it reads alongside it,
/// and so each record call's increment-then-append is atomic with respect to
/// concurrent readers and writers.
pub struct MutexStatsLog {
    inner: Mutex<Inner>,
}

impl MutexStatsLog {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                total_queries: 0,
                blocked_queries: 0,
                ring: VecDeque::with_capacity(RING_CAPACITY),
            }),
        }
    }
}

impl Default for MutexStatsLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsLogPort for MutexStatsLog {
    fn record_arrival(&self, line: String) {
        let mut inner = self.inner.lock().unwrap();
        inner.total_queries += 1;
        inner.push(line);
    }

    fn record_outcome(&self, event: QueryEvent) {
        let mut inner = self.inner.lock().unwrap();
        if event.outcome.is_blocked() {
            inner.blocked_queries += 1;
        }
        inner.push(event.to_string());
    }

    fn read_stats(&self) -> Stats {
        let inner = self.inner.lock().unwrap();
        Stats {
            total_queries: inner.total_queries,
            blocked_queries: inner.blocked_queries,
        }
    }

    fn read_logs(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner.ring.iter().rev().cloned().collect()
    }
}
