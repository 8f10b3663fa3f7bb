use std::net::SocketAddr;
use std::time::Duration;
use serde::Serialize;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::peer_id::PeerId;

#[derive(PartialEq, Eq, Debug, Clone, Serialize)]
pub struct TorrentPeer {
    pub peer_id: PeerId,
    pub peer_addr: SocketAddr,
    /// Last announce, as time since the UNIX epoch taken from the tracker clock.
    pub updated: Duration,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub event: AnnounceEvent,
}
