use serde::{Deserialize, Serialize};

/// Ban list configuration
///
/// The ban list is a plain text file, one domain per line. Names on it are
/// resolved through the designated resolver instead of the normal upstream
/// path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BanListConfig {
    /// Path to the ban list file. Required; startup fails without it.
    #[serde(default)]
    pub path: String,

    /// Seconds between staleness checks of the file. Zero disables the
    /// periodic reload; the startup load still happens.
    #[serde(default = "default_reload_seconds")]
    pub reload_seconds: u64,
}

fn default_reload_seconds() -> u64 {
    5
}

impl Default for BanListConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            reload_seconds: default_reload_seconds(),
        }
    }
}
