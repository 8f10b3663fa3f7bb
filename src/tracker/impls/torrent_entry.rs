use std::time::Duration;
use rand::RngExt;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::peer_upsert::PeerUpsert;
use crate::tracker::structs::swarm_stats::SwarmStats;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_snapshot::TorrentSnapshot;
use crate::tracker::types::ahash_map::{AHashMap, AHashSet};

impl TorrentEntry {
    pub fn new(now: Duration) -> TorrentEntry {
        TorrentEntry {
            seeds: AHashMap::default(),
            peers: AHashMap::default(),
            completed_peers: AHashSet::default(),
            completed: 0u64,
            enabled: true,
            removed: false,
            updated: now,
        }
    }

    pub fn stats(&self) -> SwarmStats {
        SwarmStats {
            complete: self.seeds.len() as u64,
            incomplete: self.peers.len() as u64,
            downloaded: self.completed,
        }
    }

    pub fn get_peer(&self, peer_key: &PeerKey) -> Option<&TorrentPeer> {
        self.seeds.get(peer_key).or_else(|| self.peers.get(peer_key))
    }

    /// Inserts or replaces the record of `torrent_peer`, filing it under seeds
    /// or peers by its `left` counter. With `completed` set, the swarm's
    /// lifetime counter grows by one the first time this peer key completes.
    pub fn upsert_peer(&mut self, torrent_peer: TorrentPeer, completed: bool) -> PeerUpsert {
        let peer_key = torrent_peer.key();
        let previous = self.remove_peer(&peer_key);

        let first_completed = completed && self.completed_peers.insert(peer_key);
        if first_completed {
            self.completed += 1;
        }

        self.updated = torrent_peer.updated;
        if torrent_peer.is_seed() {
            self.seeds.insert(peer_key, torrent_peer);
        } else {
            self.peers.insert(peer_key, torrent_peer);
        }

        PeerUpsert {
            previous,
            first_completed,
            stats: self.stats(),
        }
    }

    pub fn remove_peer(&mut self, peer_key: &PeerKey) -> Option<TorrentPeer> {
        self.seeds.remove(peer_key).or_else(|| self.peers.remove(peer_key))
    }

    /// Drops every peer whose last announce is older than `cutoff`.
    /// Returns the number of seeds and peers removed.
    pub fn retain_active(&mut self, cutoff: Duration) -> (u64, u64) {
        let (seeds_before, peers_before) = (self.seeds.len(), self.peers.len());
        self.seeds.retain(|_, torrent_peer| torrent_peer.updated >= cutoff);
        self.peers.retain(|_, torrent_peer| torrent_peer.updated >= cutoff);
        (
            (seeds_before - self.seeds.len()) as u64,
            (peers_before - self.peers.len()) as u64,
        )
    }

    /// Picks up to `numwant` peers other than `exclude`.
    ///
    /// A seeder only gets leechers; a leecher gets seeds first, then other
    /// leechers. Each map is walked from a random offset so large swarms do
    /// not hand out the same subset on every announce.
    pub fn select_peers(&self, exclude: &PeerKey, is_seed: bool, numwant: usize) -> Vec<TorrentPeer> {
        let mut selected = Vec::with_capacity(numwant.min(self.seeds.len() + self.peers.len()));
        if !is_seed {
            Self::sample_peers(&self.seeds, exclude, numwant, &mut selected);
        }
        Self::sample_peers(&self.peers, exclude, numwant, &mut selected);
        selected
    }

    fn sample_peers(map: &AHashMap<PeerKey, TorrentPeer>, exclude: &PeerKey, numwant: usize, selected: &mut Vec<TorrentPeer>) {
        if selected.len() >= numwant || map.is_empty() {
            return;
        }
        let start = rand::rng().random_range(0..map.len());
        for (peer_key, torrent_peer) in map.iter().skip(start).chain(map.iter().take(start)) {
            if selected.len() >= numwant {
                break;
            }
            if peer_key == exclude {
                continue;
            }
            selected.push(torrent_peer.clone());
        }
    }

    pub fn snapshot(&self) -> TorrentSnapshot {
        let mut completed_peers: Vec<PeerKey> = self.completed_peers.iter().copied().collect();
        completed_peers.sort();
        TorrentSnapshot {
            completed: self.completed,
            completed_peers,
            enabled: self.enabled,
        }
    }

    pub fn restore(&mut self, snapshot: TorrentSnapshot) {
        self.completed = snapshot.completed;
        self.completed_peers = snapshot.completed_peers.into_iter().collect();
        self.enabled = snapshot.enabled;
    }
}

impl Default for TorrentEntry {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}
