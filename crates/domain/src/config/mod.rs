//! Configuration module for Bypass DNS
//!
//! Configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listener port and binding
//! - `ban_list`: Ban list file location and reload cadence
//! - `dns`: Designated resolver, fallback upstreams, timeouts
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod ban_list;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use ban_list::BanListConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
