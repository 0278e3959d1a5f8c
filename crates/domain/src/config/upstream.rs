use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_upstream", rename = "UPSTREAM_DNS")]
    pub upstream_dns: String,
}

fn default_upstream() -> String {
    "8.8.8.8".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            upstream_dns: default_upstream(),
        }
    }
}
