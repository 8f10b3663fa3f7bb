#![allow(dead_code)]
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use rand::RngExt;
use swarm_tracker::api::structs::api_service_data::ApiServiceData;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::http::structs::http_service_data::HttpServiceData;
use swarm_tracker::tracker::enums::announce_event::AnnounceEvent;
use swarm_tracker::tracker::structs::announce_query_request::AnnounceQueryRequest;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::memory_authorization::MemoryAuthorization;
use swarm_tracker::tracker::structs::no_persistence::NoPersistence;
use swarm_tracker::tracker::structs::passkey::Passkey;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::stopped_clock::StoppedClock;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
use swarm_tracker::tracker::traits::persistence_sync::PersistenceSync;

pub type TestTracker = Arc<TorrentTracker>;

pub const PASSKEY: &str = "abcdef0123456789";
pub const API_KEY: &str = "MyApiKey";
pub const START: Duration = Duration::from_secs(1_700_000_000);

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.tracker_config.passkeys = vec![String::from(PASSKEY)];
    config.tracker_config.api_key = String::from(API_KEY);
    config
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(TorrentTracker::from_config(Arc::new(create_test_config())))
}

pub struct TestTrackerParts {
    pub tracker: TestTracker,
    pub authorization: Arc<MemoryAuthorization>,
    pub clock: Arc<StoppedClock>,
}

/// Tracker with a controllable clock and access to its passkey store.
pub fn create_controlled_tracker(config: Configuration, persistence: Arc<dyn PersistenceSync>) -> TestTrackerParts {
    let authorization = Arc::new(MemoryAuthorization::from_passkeys(&config.tracker_config.passkeys));
    let clock = Arc::new(StoppedClock::new(START));
    let tracker = Arc::new(TorrentTracker::new(
        Arc::new(config),
        authorization.clone(),
        persistence,
        clock.clone(),
    ));
    TestTrackerParts { tracker, authorization, clock }
}

pub fn create_clocked_tracker() -> TestTrackerParts {
    create_controlled_tracker(create_test_config(), Arc::new(NoPersistence))
}

pub fn create_http_service_data(tracker: TestTracker) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData {
        torrent_tracker: tracker,
        http_trackers_config: Arc::new(Configuration::init().http_server[0].clone()),
    })
}

pub fn create_api_service_data(tracker: TestTracker) -> Arc<ApiServiceData> {
    Arc::new(ApiServiceData {
        torrent_tracker: tracker,
        api_trackers_config: Arc::new(Configuration::init().api_server[0].clone()),
    })
}

pub fn passkey() -> Passkey {
    Passkey::new(PASSKEY).unwrap()
}

pub fn random_info_hash() -> InfoHash {
    let bytes: [u8; 20] = rand::rng().random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let bytes: [u8; 20] = rand::rng().random();
    PeerId(bytes)
}

pub fn url_encode(bytes: &[u8]) -> String {
    percent_encode(bytes, NON_ALPHANUMERIC).to_string()
}

pub fn create_announce(info_hash: InfoHash, peer_id: PeerId, addr: SocketAddr, left: u64, event: AnnounceEvent) -> AnnounceQueryRequest {
    AnnounceQueryRequest {
        info_hash,
        peer_id,
        port: addr.port(),
        uploaded: 0,
        downloaded: 0,
        left,
        compact: true,
        no_peer_id: false,
        event,
        remote_addr: addr.ip(),
        numwant: 50,
    }
}

pub fn peer_addr(index: u32) -> SocketAddr {
    let octets = (0x0a00_0000u32 + index).to_be_bytes();
    SocketAddr::new(IpAddr::from(octets), 6881)
}
