//! Palisade DNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod list_action;
pub mod query_log;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::RecordType;
pub use domain_name::normalize_domain;
pub use errors::DomainError;
pub use list_action::{hierarchical_match, ListAction};
pub use query_log::{arrival_line, Outcome, QueryEvent};
