use serde::{Deserialize, Serialize};
use crate::config::structs::api_trackers_config::ApiTrackersConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::persistence_config::PersistenceConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub tracker_config: TrackerConfig,
    pub persistence: PersistenceConfig,
    pub http_server: Vec<HttpTrackersConfig>,
    pub api_server: Vec<ApiTrackersConfig>
}
