use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_host", rename = "DNS_HOST")]
    pub dns_host: String,

    #[serde(default = "default_dns_port", rename = "DNS_PORT")]
    pub dns_port: u16,

    #[serde(default = "default_web_port", rename = "WEB_DASHBOARD_PORT")]
    pub web_dashboard_port: u16,
}

fn default_dns_host() -> String {
    "0.0.0.0".to_string()
}

fn default_dns_port() -> u16 {
    53
}

fn default_web_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_host: default_dns_host(),
            dns_port: default_dns_port(),
            web_dashboard_port: default_web_port(),
        }
    }
}
