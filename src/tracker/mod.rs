//! Private tracker engine.
//!
//! Swarms live in a registry of 256 shards keyed by the first byte of the
//! info hash. A shard lock is only held to find, insert or remove a swarm
//! handle; every peer mutation happens under that swarm's own mutex, and the
//! global statistics are adjusted inside the same critical section.
//!
//! # Main Components
//!
//! - `TorrentTracker` - announce, scrape and admin operations
//! - `TorrentSharding` - the swarm registry
//! - `TorrentEntry` - one swarm with its seeds and leechers
//! - `AuthorizationProvider`, `PersistenceSync`, `Clock` - injected collaborators
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::from_config(Arc::new(Configuration::init()));
//! assert_eq!(tracker.get_torrents_amount(), 0);
//! ```

/// Enumerations for tracker operations.
///
/// Contains the announce events, update actions and the error taxonomy.
pub mod enums;

/// Implementation blocks for tracker structs.
///
/// Contains the method implementations for the `TorrentTracker`, the swarm
/// registry and the shipped collaborators.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;

/// Collaborator traits.
pub mod traits;

/// Type aliases for shared collection types.
pub mod types;
