use std::sync::Arc;
use std::time::Duration;
use log::info;
use tokio_shutdown::Shutdown;
use crate::common::common::shutdown_waiting;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::cleanup_stats::CleanupStats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Evicts peers that did not announce within `peers_timeout` seconds.
    ///
    /// Swarms are visited one shard at a time and each swarm is cleaned under
    /// its own mutex. Emptied swarms stay registered so their download
    /// counter survives.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_stale_peers(&self) -> CleanupStats
    {
        let timeout = Duration::from_secs(self.config.tracker_config.peers_timeout);
        let cutoff = self.clock.now().saturating_sub(timeout);
        let mut cleanup_stats = CleanupStats::default();

        for shard in 0..=u8::MAX {
            for (_, handle) in self.torrents_sharding.get_shard_handles(shard) {
                let mut entry = handle.lock();
                if entry.removed {
                    continue;
                }
                let (seeds, peers) = entry.retain_active(cutoff);
                if seeds == 0 && peers == 0 {
                    continue;
                }
                self.update_stats(StatsEvent::Seeds, -(seeds as i64));
                self.update_stats(StatsEvent::Peers, -(peers as i64));
                drop(entry);

                cleanup_stats.torrents += 1;
                cleanup_stats.seeds += seeds;
                cleanup_stats.peers += peers;
            }
        }
        cleanup_stats
    }

    pub async fn peers_cleanup(self: Arc<Self>, shutdown: Shutdown)
    {
        let interval = self.config.tracker_config.peers_cleanup_interval;
        loop {
            self.set_stats(StatsEvent::TimestampTimeout, chrono::Utc::now().timestamp() + interval as i64);
            if shutdown_waiting(Duration::from_secs(interval), shutdown.clone()).await {
                info!("[BOOT] Shutting down thread for peers cleanup...");
                return;
            }

            let cleanup_stats = self.remove_stale_peers();
            info!(
                "[PEERS] Removed {} seeds and {} peers from {} torrents",
                cleanup_stats.seeds, cleanup_stats.peers, cleanup_stats.torrents
            );
        }
    }
}
