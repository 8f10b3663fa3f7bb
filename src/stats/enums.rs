//! Statistics enumerations.

/// Counter selector for `TorrentTracker::update_stats`.
pub mod stats_event;
