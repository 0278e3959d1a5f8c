pub mod get_logs;
pub mod get_stats;
pub mod update_list;

pub use get_logs::GetLogsUseCase;
pub use get_stats::GetStatsUseCase;
pub use update_list::UpdateListUseCase;
