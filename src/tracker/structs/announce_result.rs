use crate::tracker::structs::swarm_stats::SwarmStats;
use crate::tracker::structs::torrent_peer::TorrentPeer;

#[derive(Clone, Debug)]
pub struct AnnounceResult {
    /// Other peers handed to the client, never including the requester.
    pub peers: Vec<TorrentPeer>,
    pub stats: SwarmStats,
    pub interval: u64,
    pub min_interval: u64,
}
