use super::blocking::BlockingConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

/// Aggregate configuration, loaded once at startup from a flat YAML file.
/// Each concern lives in its own sub-struct but is flattened back into
/// one object on the wire, so the YAML file keeps the keys
/// (`UPSTREAM_DNS`, `SINKHOLE_IP`, …) at the top level.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(flatten)]
    pub server: ServerConfig,

    #[serde(flatten)]
    pub upstream: UpstreamConfig,

    #[serde(flatten)]
    pub blocking: BlockingConfig,

    #[serde(flatten, default)]
    pub logging: LoggingConfig,
}

/// Command-line overrides applied after the config file is loaded.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
}

impl Config {
    /// Load configuration from `path`, falling back to defaults (logging a
    /// warning, never failing) when the file is missing or malformed, then
    /// apply any CLI overrides.
    pub fn load(path: Option<&Path>, overrides: CliOverrides) -> Config {
        let mut config = match path {
            Some(path) => match Self::read_and_parse(path) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(error = %err, "Using default configuration");
                    Config::default()
                }
            },
            None => Config::default(),
        };

        if let Some(port) = overrides.dns_port {
            config.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            config.server.web_dashboard_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            config.server.dns_host = bind;
        }

        config
    }

    fn read_and_parse(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Sanity-check the loaded values. Never fatal by itself — callers log
    /// and keep running on whatever was loaded.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.upstream
            .upstream_dns
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::Invalid(format!("UPSTREAM_DNS: {}", self.upstream.upstream_dns)))?;
        self.blocking
            .sinkhole_ip
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::Invalid(format!("SINKHOLE_IP: {}", self.blocking.sinkhole_ip)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_table() {
        let config = Config::default();
        assert_eq!(config.upstream.upstream_dns, "8.8.8.8");
        assert_eq!(config.blocking.sinkhole_ip, "0.0.0.0");
        assert_eq!(config.blocking.blocklist_url, "");
        assert_eq!(config.blocking.blocklist_refresh_interval, 3600);
        assert_eq!(config.server.web_dashboard_port, 8080);
        assert_eq!(config.server.dns_port, 53);
        assert_eq!(config.server.dns_host, "0.0.0.0");
    }

    #[test]
    fn parses_flat_yaml() {
        let yaml = "UPSTREAM_DNS: 1.1.1.1\nSINKHOLE_IP: 10.0.0.1\nDNS_PORT: 5353\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.upstream.upstream_dns, "1.1.1.1");
        assert_eq!(config.blocking.sinkhole_ip, "10.0.0.1");
        assert_eq!(config.server.dns_port, 5353);
        // Unspecified keys keep their defaults.
        assert_eq!(config.server.web_dashboard_port, 8080);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/path.yaml")), CliOverrides::default());
        assert_eq!(config.upstream.upstream_dns, "8.8.8.8");
    }

    #[test]
    fn cli_overrides_win_over_file_and_defaults() {
        let overrides = CliOverrides {
            dns_port: Some(5300),
            web_port: None,
            bind_address: None,
        };
        let config = Config::load(None, overrides);
        assert_eq!(config.server.dns_port, 5300);
        assert_eq!(config.server.web_dashboard_port, 8080);
    }

    #[test]
    fn validate_rejects_bad_ip() {
        let mut config = Config::default();
        config.upstream.upstream_dns = "not-an-ip".to_string();
        assert!(config.validate().is_err());
    }
}
