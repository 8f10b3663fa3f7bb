use async_trait::async_trait;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::no_persistence::NoPersistence;
use crate::tracker::structs::swarm_update::SwarmUpdate;
use crate::tracker::structs::torrent_snapshot::TorrentSnapshot;
use crate::tracker::traits::persistence_sync::PersistenceSync;

#[async_trait]
impl PersistenceSync for NoPersistence {
    async fn save_torrents(&self, _updates: Vec<SwarmUpdate>) -> Result<(), TrackerError>
    {
        Ok(())
    }

    async fn load_torrents(&self) -> Result<Vec<(InfoHash, TorrentSnapshot)>, TrackerError>
    {
        Ok(Vec::new())
    }
}
