use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::ban_list::BanListConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Main configuration, loaded from a TOML file with optional CLI overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ban_list: BanListConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values the CLI may override on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
}

impl Config {
    /// Load configuration from `path` (defaults when `None`), then apply
    /// CLI overrides. Call [`Config::validate`] before using the result.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let text = std::fs::read_to_string(p).map_err(|source| ConfigError::Io {
                    path: p.to_string(),
                    source,
                })?;
                toml::from_str(&text)?
            }
            None => Self::default(),
        };

        if let Some(port) = overrides.dns_port {
            config.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            config.server.bind_address = bind;
        }

        Ok(config)
    }

    /// Reject configurations the server cannot start with. Anything that
    /// passes here is only allowed to fail softly at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ban_list.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ban_list.path is required".to_string(),
            ));
        }

        if self.dns.resolve_from.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidAddress {
                field: "dns.resolve_from",
                value: self.dns.resolve_from.clone(),
            });
        }

        if self.dns.upstream_servers.is_empty() {
            return Err(ConfigError::Validation(
                "dns.upstream_servers must list at least one server".to_string(),
            ));
        }
        for server in &self.dns.upstream_servers {
            if server.parse::<SocketAddr>().is_err() {
                return Err(ConfigError::InvalidAddress {
                    field: "dns.upstream_servers",
                    value: server.clone(),
                });
            }
        }

        Ok(())
    }
}
