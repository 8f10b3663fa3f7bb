//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Admin API server configuration (address, timeouts).
pub mod api_trackers_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP tracker server configuration (address, timeouts).
pub mod http_trackers_config;

/// Swarm snapshot persistence settings.
pub mod persistence_config;

/// Core tracker settings.
pub mod tracker_config;
