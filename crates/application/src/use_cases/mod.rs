pub mod dashboard;

pub use dashboard::{GetLogsUseCase, GetStatsUseCase, UpdateListUseCase};
