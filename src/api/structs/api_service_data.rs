//! Shared data context for API request handlers.

use crate::config::structs::api_trackers_config::ApiTrackersConfig;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use std::sync::Arc;

/// Shared application data available to all API request handlers.
///
/// Injected into Actix-web's application data; both fields are shared
/// across the worker threads.
pub struct ApiServiceData {
    /// Reference to the main tracker instance.
    pub torrent_tracker: Arc<TorrentTracker>,

    /// Configuration for this API server instance.
    pub api_trackers_config: Arc<ApiTrackersConfig>,
}
