pub mod engine;
pub mod forwarder;
pub mod record_type_map;
pub mod wire;

pub use engine::DnsEngine;
pub use forwarder::UdpForwarder;
