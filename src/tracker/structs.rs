//! Data structures for BitTorrent tracker operations.
//!
//! Identifier types, peer and swarm records, request/response types and the
//! shipped implementations of the tracker's collaborator traits.

/// Main tracker instance struct.
///
/// Holds the configuration, the swarm registry, pending persistence updates,
/// statistics and the injected collaborators.
pub mod torrent_tracker;

/// Announce request query parameters.
///
/// A validated announce: info hash, peer id, port, transfer counters, event
/// and response shaping flags.
pub mod announce_query_request;

/// Scrape request query parameters.
pub mod scrape_query_request;

/// Result of a processed announce.
pub mod announce_result;

/// 20-byte torrent info hash identifier.
pub mod info_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// Route-bound passkey token.
pub mod passkey;

/// Identity of a peer within one swarm (peer id plus address).
pub mod peer_key;

/// Individual peer information.
pub mod torrent_peer;

/// A swarm: seeds, leechers and lifetime completion data.
pub mod torrent_entry;

/// Sharded swarm registry.
///
/// 256 shards keyed by the first info hash byte, each swarm behind its own mutex.
pub mod torrent_sharding;

/// Aggregate complete/incomplete/downloaded counters of one swarm.
pub mod swarm_stats;

/// Outcome of inserting or updating a peer.
pub mod peer_upsert;

/// Admin view of a swarm.
pub mod torrent_status;

/// Admin patch applied to a swarm's metadata.
pub mod torrent_patch;

/// Durable part of a swarm.
pub mod torrent_snapshot;

/// One pending persistence change.
pub mod swarm_update;

/// Cleanup operation statistics.
pub mod cleanup_stats;

/// Passkey registry backed by memory.
pub mod memory_authorization;

/// Persistence sink that stores nothing.
pub mod no_persistence;

/// Persistence backed by a JSON file.
pub mod file_persistence;

/// Wall clock.
pub mod system_clock;

/// Manually driven clock.
pub mod stopped_clock;
