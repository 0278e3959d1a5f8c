//! Configuration module for Palisade DNS.
//!
//! Organized by concern, mirroring the component each setting feeds:
//! - `server`: bind address and ports for the DNS and dashboard listeners
//! - `upstream`: the forwarding resolver
//! - `blocking`: sinkhole address and blocklist feed/refresh schedule
//! - `logging`: tracing verbosity
//! - `root`: aggregate `Config`, CLI overrides, load/validate

pub mod blocking;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use blocking::BlockingConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::UpstreamConfig;
