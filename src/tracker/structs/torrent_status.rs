use serde::Serialize;
use crate::tracker::structs::info_hash::InfoHash;

#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
pub struct TorrentStatus {
    pub info_hash: InfoHash,
    pub complete: u64,
    pub incomplete: u64,
    pub downloaded: u64,
    pub enabled: bool,
}
