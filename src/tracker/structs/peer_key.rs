use std::net::SocketAddr;
use serde::{Deserialize, Serialize};
use crate::tracker::structs::peer_id::PeerId;

/// Peer identity inside one swarm.
///
/// Re-announcing with the same key updates the existing record.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerKey {
    pub peer_id: PeerId,
    pub peer_addr: SocketAddr,
}
