use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::{Mutex, RwLock};
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::types::torrent_entry_handle::TorrentEntryHandle;

impl Default for TorrentSharding {
    fn default() -> Self {
        Self::new()
    }
}

impl TorrentSharding {
    #[tracing::instrument(level = "debug")]
    pub fn new() -> TorrentSharding {
        TorrentSharding {
            shards: std::array::from_fn(|_| Arc::new(RwLock::new(BTreeMap::new()))),
        }
    }

    /// Returns the swarm for `info_hash`, creating an empty one if needed.
    /// The flag is true when this call created it.
    pub fn get_or_create(&self, info_hash: InfoHash, now: Duration) -> (TorrentEntryHandle, bool) {
        let shard = &self.shards[info_hash.shard()];
        if let Some(handle) = shard.read().get(&info_hash) {
            return (handle.clone(), false);
        }
        let mut lock = shard.write();
        match lock.get(&info_hash) {
            Some(handle) => (handle.clone(), false),
            None => {
                let handle = Arc::new(Mutex::new(TorrentEntry::new(now)));
                lock.insert(info_hash, handle.clone());
                (handle, true)
            }
        }
    }

    pub fn get(&self, info_hash: &InfoHash) -> Option<TorrentEntryHandle> {
        self.shards[info_hash.shard()].read().get(info_hash).cloned()
    }

    /// Unlinks the swarm and marks it removed, so writers still holding the
    /// old handle retry against a fresh swarm.
    pub fn delete(&self, info_hash: &InfoHash) -> Option<TorrentEntryHandle> {
        let handle = self.shards[info_hash.shard()].write().remove(info_hash)?;
        handle.lock().removed = true;
        Some(handle)
    }

    /// Handles of every swarm in one shard, collected under a short read lock.
    pub fn get_shard_handles(&self, shard: u8) -> Vec<(InfoHash, TorrentEntryHandle)> {
        match self.shards.get(shard as usize) {
            None => Vec::new(),
            Some(lock) => lock.read().iter().map(|(info_hash, handle)| (*info_hash, handle.clone())).collect(),
        }
    }

    pub fn get_torrents_amount(&self) -> u64 {
        self.shards.iter().map(|shard| shard.read().len() as u64).sum()
    }
}
