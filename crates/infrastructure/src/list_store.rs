use arc_swap::ArcSwap;
use async_trait::async_trait;
use palisade_dns_application::ports::{ListSnapshot, ListStorePort};
use palisade_dns_domain::{hierarchical_match, ListAction};
use std::collections::HashSet;
use std::sync::Arc;

/// Lock-free list store backed by one `ArcSwap` per domain set.
///
/// Readers load each pointer independently and never block a concurrent
/// writer; a writer publishes a whole new set with a single atomic swap.
pub struct ArcSwapListStore {
    denylist: ArcSwap<HashSet<String>>,
    allowlist: ArcSwap<HashSet<String>>,
    blocklist: ArcSwap<HashSet<String>>,
}

impl ArcSwapListStore {
    pub fn new() -> Self {
        Self {
            denylist: ArcSwap::from_pointee(HashSet::new()),
            allowlist: ArcSwap::from_pointee(HashSet::new()),
            blocklist: ArcSwap::from_pointee(HashSet::new()),
        }
    }
}

impl Default for ArcSwapListStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListStorePort for ArcSwapListStore {
    fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            denylist: self.denylist.load_full(),
            allowlist: self.allowlist.load_full(),
            blocklist: self.blocklist.load_full(),
        }
    }

    fn match_domain(&self, qname: &str, snapshot: &ListSnapshot) -> Option<(ListAction, String)> {
        hierarchical_match(qname, &snapshot.denylist, &snapshot.allowlist, &snapshot.blocklist)
    }

    fn replace_blocklist(&self, domains: HashSet<String>) {
        self.blocklist.store(Arc::new(domains));
    }

    fn replace_allowlist(&self, domains: HashSet<String>) {
        self.allowlist.store(Arc::new(domains));
    }

    fn replace_denylist(&self, domains: HashSet<String>) {
        self.denylist.store(Arc::new(domains));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn replace_is_visible_to_subsequent_snapshots() {
        let store = ArcSwapListStore::new();
        store.replace_blocklist(set(&["example.com"]));

        let snap = store.snapshot();
        assert_eq!(snap.blocklist.len(), 1);
        assert!(snap.blocklist.contains("example.com"));
    }

    #[test]
    fn match_domain_delegates_to_hierarchical_match() {
        let store = ArcSwapListStore::new();
        store.replace_blocklist(set(&["example.com"]));
        let snap = store.snapshot();

        let result = store.match_domain("sub.example.com", &snap);
        assert_eq!(result, Some((ListAction::Blocklist, "example.com".to_string())));
    }

    #[test]
    fn snapshot_isolated_from_later_writes() {
        let store = ArcSwapListStore::new();
        store.replace_allowlist(set(&["a.com"]));
        let snap = store.snapshot();

        store.replace_allowlist(set(&["b.com"]));

        assert!(snap.allowlist.contains("a.com"));
        assert!(!snap.allowlist.contains("b.com"));
    }
}
