use thiserror::Error;

/// Errors raised while loading or validating the configuration.
///
/// These are the only errors that abort startup; everything that happens
/// after setup degrades gracefully instead.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),

    #[error("invalid socket address for '{field}': '{value}'")]
    InvalidAddress { field: &'static str, value: String },
}
