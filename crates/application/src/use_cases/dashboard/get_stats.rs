use crate::dto::StatsView;
use crate::ports::{ListStorePort, StatsLogPort};
use std::sync::Arc;

pub struct GetStatsUseCase {
    list_store: Arc<dyn ListStorePort>,
    stats_log: Arc<dyn StatsLogPort>,
}

impl GetStatsUseCase {
    pub fn new(list_store: Arc<dyn ListStorePort>, stats_log: Arc<dyn StatsLogPort>) -> Self {
        Self { list_store, stats_log }
    }

    pub fn execute(&self) -> StatsView {
        let stats = self.stats_log.read_stats();
        let snapshot = self.list_store.snapshot();

        let mut allowlist: Vec<String> = snapshot.allowlist.iter().cloned().collect();
        allowlist.sort();
        let mut denylist: Vec<String> = snapshot.denylist.iter().cloned().collect();
        denylist.sort();

        StatsView {
            total_queries: stats.total_queries,
            blocked_queries: stats.blocked_queries,
            blocklist_size: snapshot.blocklist.len(),
            allowlist,
            denylist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ListSnapshot;
    use palisade_dns_domain::{ListAction, QueryEvent};
    use std::collections::HashSet;
    use std::sync::Mutex;

    struct FixedListStore {
        snapshot: ListSnapshot,
    }

    #[async_trait::async_trait]
    impl ListStorePort for FixedListStore {
        fn snapshot(&self) -> ListSnapshot {
            self.snapshot.clone()
        }
        fn match_domain(&self, _qname: &str, _snapshot: &ListSnapshot) -> Option<(ListAction, String)> {
            None
        }
        fn replace_blocklist(&self, _domains: HashSet<String>) {}
        fn replace_allowlist(&self, _domains: HashSet<String>) {}
        fn replace_denylist(&self, _domains: HashSet<String>) {}
    }

    struct FixedStatsLog {
        stats: crate::ports::Stats,
        events: Mutex<Vec<QueryEvent>>,
    }

    #[async_trait::async_trait]
    impl StatsLogPort for FixedStatsLog {
        fn record_arrival(&self, _line: String) {}
        fn record_outcome(&self, event: QueryEvent) {
            self.events.lock().unwrap().push(event);
        }
        fn read_stats(&self) -> crate::ports::Stats {
            self.stats
        }
        fn read_logs(&self) -> Vec<String> {
            self.events.lock().unwrap().iter().map(|e| e.to_string()).collect()
        }
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn aggregates_counters_and_sorted_lists() {
        let list_store = Arc::new(FixedListStore {
            snapshot: ListSnapshot {
                denylist: Arc::new(set(&["z.com"])),
                allowlist: Arc::new(set(&["b.com", "a.com"])),
                blocklist: Arc::new(set(&["x.com", "y.com", "w.com"])),
            },
        });
        let stats_log = Arc::new(FixedStatsLog {
            stats: crate::ports::Stats {
                total_queries: 10,
                blocked_queries: 3,
            },
            events: Mutex::new(Vec::new()),
        });

        let use_case = GetStatsUseCase::new(list_store, stats_log);
        let view = use_case.execute();

        assert_eq!(view.total_queries, 10);
        assert_eq!(view.blocked_queries, 3);
        assert_eq!(view.blocklist_size, 3);
        assert_eq!(view.allowlist, vec!["a.com".to_string(), "b.com".to_string()]);
    }
}
