use bypass_dns_domain::{CliOverrides, Config, ConfigError};

/// Load and validate the configuration. Any error here is fatal: the
/// server refuses to start half-configured.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> Result<Config, ConfigError> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
