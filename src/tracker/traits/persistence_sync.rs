use async_trait::async_trait;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm_update::SwarmUpdate;
use crate::tracker::structs::torrent_snapshot::TorrentSnapshot;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistenceSync: Send + Sync {
    async fn save_torrents(&self, updates: Vec<SwarmUpdate>) -> Result<(), TrackerError>;

    async fn load_torrents(&self) -> Result<Vec<(InfoHash, TorrentSnapshot)>, TrackerError>;
}
