use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::traits::authorization_provider::AuthorizationProvider;
use crate::tracker::traits::clock::Clock;
use crate::tracker::traits::persistence_sync::PersistenceSync;
use crate::tracker::types::torrents_updates::TorrentsUpdates;

pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub torrents_sharding: Arc<TorrentSharding>,
    pub torrents_updates: TorrentsUpdates,
    pub stats: Arc<StatsAtomics>,
    pub authorization: Arc<dyn AuthorizationProvider>,
    pub persistence: Arc<dyn PersistenceSync>,
    pub clock: Arc<dyn Clock>,
}
