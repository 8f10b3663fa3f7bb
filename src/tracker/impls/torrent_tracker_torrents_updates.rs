use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::time::Duration;
use log::{error, info};
use tokio_shutdown::Shutdown;
use crate::common::common::shutdown_waiting;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::enums::updates_action::UpdatesAction;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm_update::SwarmUpdate;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Marks a swarm as changed for the next flush. Ignored while
    /// persistence is disabled.
    pub fn add_torrent_update(&self, info_hash: InfoHash, updates_action: UpdatesAction)
    {
        if !self.config.persistence.enabled {
            return;
        }
        if self.torrents_updates.lock().insert(info_hash, updates_action).is_none() {
            self.update_stats(StatsEvent::TorrentsUpdates, 1);
        }
    }

    pub fn get_torrent_updates_amount(&self) -> usize
    {
        self.torrents_updates.lock().len()
    }

    /// Hands every pending change to the persistence collaborator.
    ///
    /// Snapshots are taken now, each under its swarm's mutex, and no lock is
    /// held while the collaborator runs. On failure the batch goes back into
    /// the queue, except for hashes that changed again in the meantime.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn save_torrent_updates(&self) -> Result<usize, TrackerError>
    {
        let pending = std::mem::take(&mut *self.torrents_updates.lock());
        if pending.is_empty() {
            return Ok(0);
        }
        self.update_stats(StatsEvent::TorrentsUpdates, -(pending.len() as i64));

        let updates = pending.iter()
            .map(|(info_hash, updates_action)| {
                let snapshot = match updates_action {
                    UpdatesAction::Remove => None,
                    UpdatesAction::Add | UpdatesAction::Update => self.get_torrent(info_hash).map(|handle| handle.lock().snapshot()),
                };
                SwarmUpdate {
                    info_hash: *info_hash,
                    action: match snapshot {
                        None => UpdatesAction::Remove,
                        Some(_) => *updates_action,
                    },
                    snapshot,
                }
            })
            .collect::<Vec<SwarmUpdate>>();
        let amount = updates.len();

        match self.persistence.save_torrents(updates).await {
            Ok(()) => {
                self.set_stats(StatsEvent::TimestampSave, chrono::Utc::now().timestamp());
                Ok(amount)
            }
            Err(error) => {
                error!("[SYNC] Unable to save {amount} torrent updates: {}", error.detail().unwrap_or(&error.to_string()));
                let mut lock = self.torrents_updates.lock();
                let mut requeued = 0i64;
                for (info_hash, updates_action) in pending {
                    if let Entry::Vacant(vacant) = lock.entry(info_hash) {
                        vacant.insert(updates_action);
                        requeued += 1;
                    }
                }
                drop(lock);
                self.update_stats(StatsEvent::TorrentsUpdates, requeued);
                Err(error)
            }
        }
    }

    /// Restores every persisted swarm. Returns how many were loaded.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn load_torrents(&self) -> Result<u64, TrackerError>
    {
        let snapshots = self.persistence.load_torrents().await?;
        let amount = snapshots.len() as u64;
        for (info_hash, snapshot) in snapshots {
            self.import_torrent(info_hash, snapshot);
        }
        info!("[BOOT] Loaded {amount} torrents");
        Ok(amount)
    }

    pub async fn torrents_updates_sync(self: Arc<Self>, shutdown: Shutdown)
    {
        let interval = self.config.persistence.interval;
        loop {
            if shutdown_waiting(Duration::from_secs(interval), shutdown.clone()).await {
                info!("[BOOT] Shutting down thread for torrent updates...");
                return;
            }
            if let Ok(amount) = self.save_torrent_updates().await
                && amount > 0
            {
                info!("[SYNC] Saved {amount} torrent updates");
            }
        }
    }
}
