use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub api_key: String,
    pub request_interval: u64,
    pub request_interval_minimum: u64,
    pub numwant_default: u64,
    pub numwant_max: u64,
    pub peers_timeout: u64,
    pub peers_cleanup_interval: u64,
    /// Minimum seconds between two regular announces of one peer, 0 disables.
    pub announce_rate_limit: u64,
    /// Header carrying the client address when running behind a proxy.
    pub real_ip: String,
    pub passkeys: Vec<String>,
}
