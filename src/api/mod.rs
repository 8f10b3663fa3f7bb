//! Admin API for tracker management and statistics.
//!
//! Runs on its own listener, separate from the tracker endpoints, and
//! speaks JSON.
//!
//! # Endpoints
//!
//! - `GET /tracker/stats` - Tracker statistics
//! - `GET /torrent/{info_hash}` - Counters and state of one swarm
//! - `DELETE /torrent/{info_hash}` - Delete a swarm and its peers
//! - `PATCH /torrent/{info_hash}` - Enable/disable a swarm or set its download count
//!
//! # Authentication
//!
//! Every endpoint requires the configured API key as a query parameter:
//! `?token=<api_key>`

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Torrent management endpoints.
pub mod api_torrents;

/// Statistics endpoints.
pub mod api_stats;
