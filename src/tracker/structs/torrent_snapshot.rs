use serde::{Deserialize, Serialize};
use crate::tracker::structs::peer_key::PeerKey;

/// What survives a restart: lifetime downloads, who already completed, and
/// whether the swarm is enabled. Live peers are not persisted.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct TorrentSnapshot {
    pub completed: u64,
    #[serde(default)]
    pub completed_peers: Vec<PeerKey>,
    pub enabled: bool,
}
