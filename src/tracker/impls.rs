//! Implementation blocks for tracker data structures.
//!
//! Implementations are organized by the struct they extend; the
//! `torrent_tracker_*` files split `TorrentTracker` by concern.

/// InfoHash implementation: Display, FromStr, Serialize, Deserialize.
pub mod info_hash;

/// PeerId implementation: Display, Serialize, client detection.
pub mod peer_id;

/// Passkey construction and masked display.
pub mod passkey;

/// AnnounceEvent implementation: query parsing.
pub mod announce_event;

/// TrackerError codes, classes and HTTP statuses.
pub mod tracker_error;

/// TorrentPeer implementation: key and seeder check.
pub mod torrent_peer;

/// TorrentEntry implementation: peer upsert, eviction and selection.
pub mod torrent_entry;

/// TorrentSharding implementation: sharded storage operations.
pub mod torrent_sharding;

/// TorrentTracker construction.
pub mod torrent_tracker;

/// TorrentTracker announce/scrape validation and handlers.
pub mod torrent_tracker_handlers;

/// TorrentTracker swarm and peer registry operations, including admin ones.
pub mod torrent_tracker_torrents;

/// TorrentTracker stale peer eviction.
pub mod torrent_tracker_peers;

/// TorrentTracker persistence queue and flushing.
pub mod torrent_tracker_torrents_updates;

/// In-memory passkey registry.
pub mod memory_authorization;

/// Persistence that does nothing.
pub mod no_persistence;

/// JSON file persistence.
pub mod file_persistence;

/// Wall clock.
pub mod system_clock;

/// Test clock.
pub mod stopped_clock;
