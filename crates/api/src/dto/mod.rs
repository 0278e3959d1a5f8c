pub mod lists;
pub mod logs;
pub mod stats;

pub use lists::{UpdateListRequest, UpdateListResponse};
pub use logs::LogsResponse;
pub use stats::StatsResponse;
