//! Configuration management module.
//!
//! Loads, validates and writes the tracker configuration (`config.toml`).
//!
//! # Configuration Structure
//!
//! - **root**: `log_level`, `log_console_interval`
//! - **tracker_config**: intervals, numwant bounds, peer timeout, rate limit, passkeys
//! - **persistence**: durable swarm snapshots (on/off, flush interval, file path)
//! - **http_server**: tracker HTTP listeners
//! - **api_server**: admin API listeners
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false)?;
//! config.validate()?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
