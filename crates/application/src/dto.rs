/// Snapshot of counters and list sizes/contents for the dashboard's
/// `/api/stats` endpoint.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub total_queries: u64,
    pub blocked_queries: u64,
    pub blocklist_size: usize,
    pub allowlist: Vec<String>,
    pub denylist: Vec<String>,
}

/// Which of the two operator-managed lists a write targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableList {
    Allowlist,
    Denylist,
}
