use std::time::Duration;
use serde::Serialize;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::types::ahash_map::{AHashMap, AHashSet};

/// One swarm.
///
/// `complete` and `incomplete` are the sizes of `seeds` and `peers`, so they
/// can never disagree with the peer set. `completed` only grows through
/// explicit completed events, once per [`PeerKey`] (tracked in
/// `completed_peers`), or through an admin patch.
#[derive(Serialize, Clone, Debug)]
pub struct TorrentEntry {
    #[serde(skip_serializing)]
    pub seeds: AHashMap<PeerKey, TorrentPeer>,
    #[serde(skip_serializing)]
    pub peers: AHashMap<PeerKey, TorrentPeer>,
    #[serde(skip_serializing)]
    pub completed_peers: AHashSet<PeerKey>,
    pub completed: u64,
    pub enabled: bool,
    /// Set once the swarm has been deleted from the registry.
    #[serde(skip_serializing)]
    pub removed: bool,
    pub updated: Duration,
}
