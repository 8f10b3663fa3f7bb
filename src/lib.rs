//! # Swarm Tracker
//!
//! A private BitTorrent HTTP tracker built on Actix-web.
//!
//! ## Overview
//!
//! Peers announce through `/{passkey}/announce` and read swarm counters
//! through `/{passkey}/scrape`. Every request is validated, authorized
//! against its passkey and then applied to an in-memory swarm registry.
//! Responses are bencoded. A separate JSON admin API exposes statistics and
//! lets operators delete, disable or patch individual swarms.
//!
//! ## Features
//!
//! - **Passkey gating**: pluggable authorization, checked before any state change
//! - **Sharded registry**: 256 shards with a mutex per swarm, no global lock
//! - **Compact peers**: IPv4 `peers` and IPv6 `peers6` blobs (BEP 23, BEP 7)
//! - **Scrape**: multi-hash scrape with raw-hash `files` dictionary (BEP 48)
//! - **Persistence**: optional JSON snapshots of download counters and swarm state
//! - **Eviction**: background removal of peers that stopped announcing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::load_from_file(false)?);
//! let tracker = Arc::new(TorrentTracker::from_config(config));
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Admin JSON endpoints
//! - [`common`] - Query parsing, client address resolution, logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - Tracker HTTP endpoints and bencoded responses
//! - [`stats`] - Process-wide counters
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Swarm registry, announce and scrape engines

/// Admin API endpoints.
///
/// Statistics plus delete/patch operations on single swarms, guarded by
/// the configured API key.
pub mod api;

/// Shared utilities.
///
/// Query string decoding, client IP resolution, shutdown waiting and
/// logger setup.
pub mod common;

/// Configuration management.
///
/// Loading, validating and writing `config.toml`.
pub mod config;

/// Tracker HTTP endpoints.
pub mod http;

/// Statistics tracking.
pub mod stats;

/// CLI argument structures.
pub mod structs;

/// Core tracker implementation.
///
/// The swarm registry, announce and scrape engines, the error taxonomy
/// and the collaborator traits.
pub mod tracker;
