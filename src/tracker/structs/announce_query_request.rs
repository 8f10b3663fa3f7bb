use std::net::IpAddr;
use serde::Deserialize;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Deserialize, Clone, Debug)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub compact: bool,
    pub no_peer_id: bool,
    pub event: AnnounceEvent,
    pub remote_addr: IpAddr,
    pub numwant: u64,
}
