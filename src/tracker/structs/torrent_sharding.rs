//! Sharded swarm registry.

use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::types::torrent_entry_handle::TorrentEntryHandle;

/// Sharded storage for swarms with 256 shards.
///
/// Swarms are assigned to shards by the first byte of their info hash. A shard
/// lock is only held long enough to find, insert or remove a swarm handle; all
/// peer mutation happens under the swarm's own mutex, so announces for
/// different swarms never wait on each other once the handle is found.
///
/// Lock order is always shard first, then swarm.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use swarm_tracker::tracker::structs::info_hash::InfoHash;
/// use swarm_tracker::tracker::structs::torrent_sharding::TorrentSharding;
///
/// let sharding = TorrentSharding::new();
/// let (_handle, created) = sharding.get_or_create(InfoHash([1u8; 20]), Duration::ZERO);
/// assert!(created);
/// assert_eq!(sharding.get_torrents_amount(), 1);
/// ```
#[derive(Debug)]
pub struct TorrentSharding {
    /// Shard assignment: `shards[info_hash.0[0]]`
    pub shards: [Arc<RwLock<BTreeMap<InfoHash, TorrentEntryHandle>>>; 256],
}
