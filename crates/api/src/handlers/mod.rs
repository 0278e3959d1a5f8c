pub mod health;
pub mod lists;
pub mod logs;
pub mod stats;

pub use health::health_check;
pub use lists::{update_allowlist, update_denylist};
pub use logs::get_logs;
pub use stats::get_stats;
