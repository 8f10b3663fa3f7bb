use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_save: i64,
    pub timestamp_run_timeout: i64,
    pub timestamp_run_console: i64,
    pub torrents: i64,
    pub torrents_updates: i64,
    pub seeds: i64,
    pub peers: i64,
    pub completed: i64,
    pub announces: i64,
    pub scrapes: i64,
    pub failures: i64,
    pub auth_failures: i64,
    pub rate_limited: i64,
    pub not_found: i64,
    pub api_handled: i64,
}
