use palisade_dns_application::StatsView;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct StatsResponse {
    pub total_queries: u64,
    pub blocked_queries: u64,
    pub blocklist_size: usize,
    pub allowlist: Vec<String>,
    pub denylist: Vec<String>,
}

impl From<StatsView> for StatsResponse {
    fn from(view: StatsView) -> Self {
        Self {
            total_queries: view.total_queries,
            blocked_queries: view.blocked_queries,
            blocklist_size: view.blocklist_size,
            allowlist: view.allowlist,
            denylist: view.denylist,
        }
    }
}
