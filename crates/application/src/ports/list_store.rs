use async_trait::async_trait;
use palisade_dns_domain::ListAction;
use std::collections::HashSet;
use std::sync::Arc;

/// A consistent, point-in-time view of the three domain sets, as read by the
/// DNS engine for a single query. The three `Arc`s may individually predate
/// or postdate each other relative to concurrent writers; each one is
/// internally consistent.
#[derive(Debug, Clone)]
pub struct ListSnapshot {
    pub denylist: Arc<HashSet<String>>,
    pub allowlist: Arc<HashSet<String>>,
    pub blocklist: Arc<HashSet<String>>,
}

/// Application-layer port for the List Store.
///
/// Backed by an atomic-swap cell per list in the infrastructure layer
/// (lock-free reads, whole-set replacement on write). `snapshot` and
/// `match_domain` are synchronous and must never block on a writer.
#[async_trait]
pub trait ListStorePort: Send + Sync {
    /// Take a consistent view of the three sets for one query's lookup.
    fn snapshot(&self) -> ListSnapshot;

    /// Resolve `qname` against `snapshot` using the hierarchical match rule.
    fn match_domain(&self, qname: &str, snapshot: &ListSnapshot) -> Option<(ListAction, String)>;

    /// Replace the blocklist wholesale. Called by the blocklist refresh job.
    fn replace_blocklist(&self, domains: HashSet<String>);

    /// Replace the allowlist wholesale. Called by the dashboard API.
    fn replace_allowlist(&self, domains: HashSet<String>);

    /// Replace the denylist wholesale. Called by the dashboard API.
    fn replace_denylist(&self, domains: HashSet<String>);
}
