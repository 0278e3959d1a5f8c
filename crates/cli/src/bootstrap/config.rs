use palisade_dns_domain::{CliOverrides, Config};
use std::path::Path;
use tracing::info;

/// Load and validate configuration. `Config::load` itself never fails — a
/// missing or malformed file falls back to defaults and logs a warning,
/// so the only fallible step left is the semantic IP validation.
pub fn load_config(config_path: Option<&Path>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, overrides);
    config.validate()?;

    info!(
        config_file = config_path.map(|p| p.display().to_string()).unwrap_or_else(|| "default".to_string()),
        dns_port = config.server.dns_port,
        web_port = config.server.web_dashboard_port,
        bind = %config.server.dns_host,
        upstream = %config.upstream.upstream_dns,
        "Configuration loaded"
    );

    Ok(config)
}
