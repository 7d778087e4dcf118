use serde::{Deserialize, Serialize};

/// DNS resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Resolver used for names on the ban list (host:port). This is the
    /// endpoint expected to answer honestly for censored names.
    #[serde(default = "default_resolve_from")]
    pub resolve_from: String,

    /// Upstreams for everything that is not on the list, tried in order by
    /// the chain-tail forwarder.
    #[serde(default = "default_upstream_servers")]
    pub upstream_servers: Vec<String>,

    /// Per-exchange timeout in milliseconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

fn default_resolve_from() -> String {
    "8.8.8.8:53".to_string()
}

fn default_upstream_servers() -> Vec<String> {
    vec!["1.1.1.1:53".to_string()]
}

fn default_query_timeout() -> u64 {
    2000
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            resolve_from: default_resolve_from(),
            upstream_servers: default_upstream_servers(),
            query_timeout: default_query_timeout(),
        }
    }
}
