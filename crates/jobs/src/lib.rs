//! Palisade DNS Background Jobs
//!
//! Periodic tasks that run alongside the DNS engine and dashboard API.
pub mod blocklist_refresh;

pub use blocklist_refresh::BlocklistRefreshJob;
