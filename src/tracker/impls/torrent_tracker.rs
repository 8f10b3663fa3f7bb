use std::sync::Arc;
use parking_lot::Mutex;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::file_persistence::FilePersistence;
use crate::tracker::structs::memory_authorization::MemoryAuthorization;
use crate::tracker::structs::no_persistence::NoPersistence;
use crate::tracker::structs::system_clock::SystemClock;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::traits::authorization_provider::AuthorizationProvider;
use crate::tracker::traits::clock::Clock;
use crate::tracker::traits::persistence_sync::PersistenceSync;
use crate::tracker::types::ahash_map::AHashMap;

impl TorrentTracker {
    pub fn new(
        config: Arc<Configuration>,
        authorization: Arc<dyn AuthorizationProvider>,
        persistence: Arc<dyn PersistenceSync>,
        clock: Arc<dyn Clock>,
    ) -> TorrentTracker
    {
        let started = clock.now().as_secs() as i64;
        TorrentTracker {
            config,
            torrents_sharding: Arc::new(TorrentSharding::new()),
            torrents_updates: Arc::new(Mutex::new(AHashMap::default())),
            stats: Arc::new(StatsAtomics::new(started)),
            authorization,
            persistence,
            clock,
        }
    }

    /// Tracker wired with the shipped collaborators: passkeys from the
    /// configuration, the JSON file store when persistence is enabled, and
    /// the system clock.
    pub fn from_config(config: Arc<Configuration>) -> TorrentTracker
    {
        let authorization = Arc::new(MemoryAuthorization::from_passkeys(&config.tracker_config.passkeys));
        let persistence: Arc<dyn PersistenceSync> = match config.persistence.enabled {
            true => Arc::new(FilePersistence::new(&config.persistence.path)),
            false => Arc::new(NoPersistence),
        };
        TorrentTracker::new(config, authorization, persistence, Arc::new(SystemClock))
    }
}
