use serde::{Deserialize, Serialize};

/// Sinkhole address and blocklist feed/refresh schedule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    #[serde(default = "default_sinkhole_ip", rename = "SINKHOLE_IP")]
    pub sinkhole_ip: String,

    #[serde(default, rename = "BLOCKLIST_URL")]
    pub blocklist_url: String,

    #[serde(
        default = "default_refresh_interval",
        rename = "BLOCKLIST_REFRESH_INTERVAL"
    )]
    pub blocklist_refresh_interval: u64,
}

fn default_sinkhole_ip() -> String {
    "0.0.0.0".to_string()
}

fn default_refresh_interval() -> u64 {
    3600
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            sinkhole_ip: default_sinkhole_ip(),
            blocklist_url: String::new(),
            blocklist_refresh_interval: default_refresh_interval(),
        }
    }
}
