use crate::tracker::structs::swarm_stats::SwarmStats;
use crate::tracker::structs::torrent_peer::TorrentPeer;

#[derive(Clone, Debug)]
pub struct PeerUpsert {
    /// The record that was replaced, if the peer was already known.
    pub previous: Option<TorrentPeer>,
    /// True when this call counted the peer's first completed event.
    pub first_completed: bool,
    /// Swarm counters after the update.
    pub stats: SwarmStats,
}
