use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::torrent_peer::TorrentPeer;

impl TorrentPeer {
    pub fn key(&self) -> PeerKey {
        PeerKey {
            peer_id: self.peer_id,
            peer_addr: self.peer_addr,
        }
    }

    pub fn is_seed(&self) -> bool {
        self.left == 0
    }
}
