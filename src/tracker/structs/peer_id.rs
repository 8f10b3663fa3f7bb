/// A 20-byte peer identifier as sent by the client.
///
/// Only unique per swarm together with the reporting address, see
/// [`PeerKey`](crate::tracker::structs::peer_key::PeerKey).
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
