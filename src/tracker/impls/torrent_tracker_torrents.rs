use log::{debug, info};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::enums::updates_action::UpdatesAction;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::peer_upsert::PeerUpsert;
use crate::tracker::structs::swarm_stats::SwarmStats;
use crate::tracker::structs::torrent_patch::TorrentPatch;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_snapshot::TorrentSnapshot;
use crate::tracker::structs::torrent_status::TorrentStatus;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::types::torrent_entry_handle::TorrentEntryHandle;

impl TorrentTracker {
    /// Existing swarm handle, or a new empty swarm. Never fails.
    pub fn get_or_create_torrent(&self, info_hash: InfoHash) -> TorrentEntryHandle
    {
        let (handle, created) = self.torrents_sharding.get_or_create(info_hash, self.clock.now());
        if created {
            debug!("[TORRENTS] Created swarm {info_hash}");
            self.update_stats(StatsEvent::Torrents, 1);
            self.add_torrent_update(info_hash, UpdatesAction::Add);
        }
        handle
    }

    pub fn get_torrent(&self, info_hash: &InfoHash) -> Option<TorrentEntryHandle>
    {
        self.torrents_sharding.get(info_hash)
    }

    /// Current counters of a swarm; `None` when the hash is unknown.
    pub fn get_torrent_stats(&self, info_hash: &InfoHash) -> Option<SwarmStats>
    {
        self.torrents_sharding.get(info_hash).map(|handle| handle.lock().stats())
    }

    pub fn get_torrent_status(&self, info_hash: &InfoHash) -> Option<TorrentStatus>
    {
        self.torrents_sharding.get(info_hash).map(|handle| {
            let entry = handle.lock();
            Self::torrent_status(*info_hash, entry.stats(), entry.enabled)
        })
    }

    pub fn get_torrents_amount(&self) -> u64
    {
        self.torrents_sharding.get_torrents_amount()
    }

    /// Inserts or updates a peer in its swarm, creating the swarm when needed.
    ///
    /// Fails with [`TrackerError::InvalidAuth`] on a disabled swarm. When the
    /// swarm is deleted concurrently the write is retried on a fresh swarm.
    pub fn upsert_peer(&self, info_hash: InfoHash, torrent_peer: TorrentPeer, completed: bool) -> Result<PeerUpsert, TrackerError>
    {
        loop {
            let handle = self.get_or_create_torrent(info_hash);
            let mut entry = handle.lock();
            if entry.removed {
                continue;
            }
            if !entry.enabled {
                return Err(TrackerError::InvalidAuth);
            }

            let is_seed = torrent_peer.is_seed();
            let upsert = entry.upsert_peer(torrent_peer, completed);
            let (was_seed, was_peer) = match &upsert.previous {
                None => (0, 0),
                Some(previous) if previous.is_seed() => (1, 0),
                Some(_) => (0, 1),
            };
            self.update_stats(StatsEvent::Seeds, is_seed as i64 - was_seed);
            self.update_stats(StatsEvent::Peers, !is_seed as i64 - was_peer);
            if upsert.first_completed {
                self.update_stats(StatsEvent::Completed, 1);
            }
            drop(entry);

            if upsert.first_completed {
                self.add_torrent_update(info_hash, UpdatesAction::Update);
            }
            return Ok(upsert);
        }
    }

    /// Removes a peer from its swarm. Returns the removed record (if any) and
    /// the swarm counters afterwards. An unknown swarm is left uncreated and
    /// reports zeroes.
    pub fn remove_peer(&self, info_hash: InfoHash, peer_key: &PeerKey) -> Result<(Option<TorrentPeer>, SwarmStats), TrackerError>
    {
        loop {
            let Some(handle) = self.torrents_sharding.get(&info_hash) else {
                return Ok((None, SwarmStats::default()));
            };
            let mut entry = handle.lock();
            if entry.removed {
                continue;
            }
            if !entry.enabled {
                return Err(TrackerError::InvalidAuth);
            }

            let removed = entry.remove_peer(peer_key);
            if let Some(torrent_peer) = &removed {
                match torrent_peer.is_seed() {
                    true => self.update_stats(StatsEvent::Seeds, -1),
                    false => self.update_stats(StatsEvent::Peers, -1),
                };
            }
            return Ok((removed, entry.stats()));
        }
    }

    /// Up to `numwant` peers of the swarm other than `peer_key`.
    pub fn get_peers_for(&self, info_hash: &InfoHash, peer_key: &PeerKey, is_seed: bool, numwant: usize) -> Vec<TorrentPeer>
    {
        match self.torrents_sharding.get(info_hash) {
            None => Vec::new(),
            Some(handle) => handle.lock().select_peers(peer_key, is_seed, numwant),
        }
    }

    pub fn get_peer(&self, info_hash: &InfoHash, peer_key: &PeerKey) -> Option<TorrentPeer>
    {
        self.torrents_sharding.get(info_hash).and_then(|handle| handle.lock().get_peer(peer_key).cloned())
    }

    /// Deletes a swarm with all its peers.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn delete_torrent(&self, info_hash: InfoHash) -> Result<TorrentStatus, TrackerError>
    {
        let handle = self.torrents_sharding.delete(&info_hash).ok_or(TrackerError::InfoHashNotFound)?;
        let entry = handle.lock();
        let stats = entry.stats();
        self.update_stats(StatsEvent::Seeds, -(stats.complete as i64));
        self.update_stats(StatsEvent::Peers, -(stats.incomplete as i64));
        self.update_stats(StatsEvent::Torrents, -1);
        let status = Self::torrent_status(info_hash, stats, entry.enabled);
        drop(entry);

        self.add_torrent_update(info_hash, UpdatesAction::Remove);
        info!("[TORRENTS] Deleted swarm {info_hash} ({} seeds, {} peers dropped)", stats.complete, stats.incomplete);
        Ok(status)
    }

    /// Applies an admin patch, creating the swarm when it does not exist yet.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn update_torrent(&self, info_hash: InfoHash, patch: TorrentPatch) -> TorrentStatus
    {
        loop {
            let handle = self.get_or_create_torrent(info_hash);
            let mut entry = handle.lock();
            if entry.removed {
                continue;
            }
            if let Some(enabled) = patch.enabled {
                entry.enabled = enabled;
            }
            if let Some(downloaded) = patch.downloaded {
                self.update_stats(StatsEvent::Completed, downloaded as i64 - entry.completed as i64);
                entry.completed = downloaded;
            }
            let status = Self::torrent_status(info_hash, entry.stats(), entry.enabled);
            drop(entry);

            self.add_torrent_update(info_hash, UpdatesAction::Update);
            info!("[TORRENTS] Updated swarm {info_hash}: enabled={} downloaded={}", status.enabled, status.downloaded);
            return status;
        }
    }

    /// Restores the durable part of a swarm, e.g. after a restart.
    pub fn import_torrent(&self, info_hash: InfoHash, snapshot: TorrentSnapshot)
    {
        loop {
            let (handle, created) = self.torrents_sharding.get_or_create(info_hash, self.clock.now());
            let mut entry = handle.lock();
            if entry.removed {
                continue;
            }
            if created {
                self.update_stats(StatsEvent::Torrents, 1);
            }
            self.update_stats(StatsEvent::Completed, snapshot.completed as i64 - entry.completed as i64);
            entry.restore(snapshot);
            return;
        }
    }

    fn torrent_status(info_hash: InfoHash, stats: SwarmStats, enabled: bool) -> TorrentStatus
    {
        TorrentStatus {
            info_hash,
            complete: stats.complete,
            incomplete: stats.incomplete,
            downloaded: stats.downloaded,
            enabled,
        }
    }
}
