use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::enums::updates_action::UpdatesAction;
use crate::tracker::structs::file_persistence::FilePersistence;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm_update::SwarmUpdate;
use crate::tracker::structs::torrent_snapshot::TorrentSnapshot;
use crate::tracker::traits::persistence_sync::PersistenceSync;

impl FilePersistence {
    pub fn new<P: AsRef<Path>>(path: P) -> FilePersistence
    {
        FilePersistence {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path
    {
        &self.path
    }

    fn temporary_path(&self) -> PathBuf
    {
        let mut temporary = self.path.clone().into_os_string();
        temporary.push(".tmp");
        PathBuf::from(temporary)
    }

    async fn read_document(&self) -> Result<BTreeMap<InfoHash, TorrentSnapshot>, TrackerError>
    {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|error| TrackerError::GenericError(format!("{}: {error}", self.path.display()))),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(TrackerError::GenericError(format!("{}: {error}", self.path.display()))),
        }
    }
}

#[async_trait]
impl PersistenceSync for FilePersistence {
    async fn save_torrents(&self, updates: Vec<SwarmUpdate>) -> Result<(), TrackerError>
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        for update in updates {
            match (update.action, update.snapshot) {
                (UpdatesAction::Remove, _) | (_, None) => { document.remove(&update.info_hash); }
                (_, Some(snapshot)) => { document.insert(update.info_hash, snapshot); }
            }
        }

        let bytes = serde_json::to_vec_pretty(&document)
            .map_err(|error| TrackerError::GenericError(error.to_string()))?;
        let temporary = self.temporary_path();
        tokio::fs::write(&temporary, bytes).await
            .map_err(|error| TrackerError::GenericError(format!("{}: {error}", temporary.display())))?;
        tokio::fs::rename(&temporary, &self.path).await
            .map_err(|error| TrackerError::GenericError(format!("{}: {error}", self.path.display())))?;
        debug!("[SYNC] Wrote {} torrents to {}", document.len(), self.path.display());
        Ok(())
    }

    async fn load_torrents(&self) -> Result<Vec<(InfoHash, TorrentSnapshot)>, TrackerError>
    {
        Ok(self.read_document().await?.into_iter().collect())
    }
}
