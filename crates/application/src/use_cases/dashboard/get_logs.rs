use crate::ports::StatsLogPort;
use std::sync::Arc;

pub struct GetLogsUseCase {
    stats_log: Arc<dyn StatsLogPort>,
}

impl GetLogsUseCase {
    pub fn new(stats_log: Arc<dyn StatsLogPort>) -> Self {
        Self { stats_log }
    }

    /// Newest-first rendered log lines, capped at the ring's capacity.
    pub fn execute(&self) -> Vec<String> {
        self.stats_log.read_logs()
    }
}
