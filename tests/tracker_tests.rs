mod common;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use swarm_tracker::tracker::enums::announce_event::AnnounceEvent;
use swarm_tracker::tracker::enums::tracker_error::TrackerError;
use swarm_tracker::tracker::structs::file_persistence::FilePersistence;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::passkey::Passkey;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::peer_key::PeerKey;
use swarm_tracker::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use swarm_tracker::tracker::structs::swarm_stats::SwarmStats;
use swarm_tracker::tracker::structs::torrent_patch::TorrentPatch;
use swarm_tracker::tracker::traits::persistence_sync::PersistenceSync;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_announces_on_two_swarms() {
    let tracker = common::create_test_tracker();
    let hashes = [InfoHash([0x11; 20]), InfoHash([0xee; 20])];

    // 1000 peers per swarm: started, then completed, and every third one stops.
    let mut handles = Vec::with_capacity(2000);
    for index in 0..2000u32 {
        let tracker = tracker.clone();
        let info_hash = hashes[(index % 2) as usize];
        let stops = (index / 2) % 3 == 0;
        handles.push(tokio::spawn(async move {
            let peer_id = common::random_peer_id();
            let addr = common::peer_addr(index);
            for (left, event) in [(100, AnnounceEvent::Started), (0, AnnounceEvent::Completed)] {
                let announce = common::create_announce(info_hash, peer_id, addr, left, event);
                let result = tracker.handle_announce(announce, &common::passkey()).await?;
                assert!(result.peers.len() <= 50);
                assert!(result.peers.iter().all(|peer| peer.peer_addr != addr));
            }
            if stops {
                let announce = common::create_announce(info_hash, peer_id, addr, 0, AnnounceEvent::Stopped);
                let result = tracker.handle_announce(announce, &common::passkey()).await?;
                assert!(result.peers.is_empty());
            }
            Ok::<(), TrackerError>(())
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    for info_hash in hashes.iter() {
        assert_eq!(
            tracker.get_torrent_stats(info_hash),
            Some(SwarmStats { complete: 666, incomplete: 0, downloaded: 1000 })
        );
    }

    let stats = tracker.get_stats();
    assert_eq!(stats.torrents, 2);
    assert_eq!(stats.seeds, 1332);
    assert_eq!(stats.peers, 0);
    assert_eq!(stats.completed, 2000);
    assert_eq!(stats.announces, 2000 * 2 + 668);
    assert_eq!(tracker.get_torrents_amount(), 2);
}

#[tokio::test]
async fn test_stopped_peer_not_returned_to_others() {
    let tracker = common::create_test_tracker();
    let info_hash = common::random_info_hash();
    let (peer_a, addr_a) = (common::random_peer_id(), common::peer_addr(1));
    let (peer_b, addr_b) = (common::random_peer_id(), common::peer_addr(2));
    let (seed_d, addr_d) = (common::random_peer_id(), common::peer_addr(4));

    for (peer_id, addr, left) in [(peer_a, addr_a, 10), (peer_b, addr_b, 10), (seed_d, addr_d, 0)] {
        let announce = common::create_announce(info_hash, peer_id, addr, left, AnnounceEvent::Started);
        tracker.handle_announce(announce, &common::passkey()).await.unwrap();
    }
    assert_eq!(tracker.get_torrent_stats(&info_hash).map(|stats| (stats.complete, stats.incomplete)), Some((1, 2)));

    for (peer_id, addr, left) in [(peer_a, addr_a, 10), (seed_d, addr_d, 0)] {
        let announce = common::create_announce(info_hash, peer_id, addr, left, AnnounceEvent::Stopped);
        tracker.handle_announce(announce, &common::passkey()).await.unwrap();
    }
    assert_eq!(tracker.get_torrent_stats(&info_hash).map(|stats| (stats.complete, stats.incomplete)), Some((0, 1)));

    let late = common::create_announce(info_hash, common::random_peer_id(), common::peer_addr(3), 10, AnnounceEvent::Started);
    let result = tracker.handle_announce(late, &common::passkey()).await.unwrap();
    let returned: Vec<PeerKey> = result.peers.iter()
        .map(|peer| PeerKey { peer_id: peer.peer_id, peer_addr: peer.peer_addr })
        .collect();
    assert!(!returned.contains(&PeerKey { peer_id: peer_a, peer_addr: addr_a }));
    assert!(!returned.contains(&PeerKey { peer_id: seed_d, peer_addr: addr_d }));
    assert_eq!(returned, vec![PeerKey { peer_id: peer_b, peer_addr: addr_b }]);
    assert_eq!((result.stats.complete, result.stats.incomplete), (0, 2));

    let stats = tracker.get_stats();
    assert_eq!((stats.seeds, stats.peers), (0, 2));
}

#[tokio::test]
async fn test_concurrent_stops_drain_swarms() {
    let tracker = common::create_test_tracker();
    let info_hash = common::random_info_hash();
    let peers: Vec<(PeerId, u32)> = (0..200u32).map(|index| (common::random_peer_id(), index)).collect();

    for (peer_id, index) in peers.iter() {
        let announce = common::create_announce(info_hash, *peer_id, common::peer_addr(*index), 10, AnnounceEvent::Started);
        tracker.handle_announce(announce, &common::passkey()).await.unwrap();
    }
    assert_eq!(tracker.get_stats().peers, 200);

    let mut handles = Vec::new();
    for (peer_id, index) in peers {
        let tracker = tracker.clone();
        handles.push(tokio::spawn(async move {
            let announce = common::create_announce(info_hash, peer_id, common::peer_addr(index), 10, AnnounceEvent::Stopped);
            tracker.handle_announce(announce, &common::passkey()).await
        }));
    }
    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert!(result.peers.is_empty());
    }

    assert_eq!(tracker.get_torrent_stats(&info_hash), Some(SwarmStats::default()));
    assert_eq!(tracker.get_stats().peers, 0);
    assert_eq!(tracker.get_stats().seeds, 0);
}

#[tokio::test]
async fn test_completed_counted_once_per_peer() {
    let tracker = common::create_test_tracker();
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    let addr = common::peer_addr(1);

    for _ in 0..3 {
        let announce = common::create_announce(info_hash, peer_id, addr, 0, AnnounceEvent::Completed);
        let result = tracker.handle_announce(announce, &common::passkey()).await.unwrap();
        assert_eq!(result.stats.downloaded, 1);
        assert_eq!(result.stats.complete, 1);
    }

    let other = common::create_announce(info_hash, common::random_peer_id(), common::peer_addr(2), 0, AnnounceEvent::Completed);
    let result = tracker.handle_announce(other, &common::passkey()).await.unwrap();
    assert_eq!(result.stats.downloaded, 2);
    assert_eq!(tracker.get_stats().completed, 2);
}

#[tokio::test]
async fn test_announce_never_returns_requester() {
    let tracker = common::create_test_tracker();
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();

    let announce = common::create_announce(info_hash, peer_id, common::peer_addr(1), 10, AnnounceEvent::Started);
    let result = tracker.handle_announce(announce, &common::passkey()).await.unwrap();
    assert!(result.peers.is_empty());
    assert_eq!(result.stats.incomplete, 1);
    assert_eq!(result.interval, 1800);
    assert_eq!(result.min_interval, 900);

    let second = common::create_announce(info_hash, common::random_peer_id(), common::peer_addr(2), 0, AnnounceEvent::Started);
    let result = tracker.handle_announce(second, &common::passkey()).await.unwrap();
    assert_eq!(result.peers.len(), 1);
    assert_eq!(result.peers[0].peer_id, peer_id);
}

#[tokio::test]
async fn test_numwant_capped_by_configuration() {
    let tracker = common::create_test_tracker();
    let info_hash = common::random_info_hash();
    for index in 0..60u32 {
        let announce = common::create_announce(info_hash, common::random_peer_id(), common::peer_addr(index), 0, AnnounceEvent::Started);
        tracker.handle_announce(announce, &common::passkey()).await.unwrap();
    }

    let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    query.insert(String::from("info_hash"), vec![info_hash.0.to_vec()]);
    query.insert(String::from("peer_id"), vec![common::random_peer_id().0.to_vec()]);
    query.insert(String::from("port"), vec![b"7000".to_vec()]);
    query.insert(String::from("left"), vec![b"10".to_vec()]);
    query.insert(String::from("numwant"), vec![b"10000".to_vec()]);
    let announce = tracker.validate_announce(common::peer_addr(999).ip(), &query).unwrap();
    assert_eq!(announce.numwant, 50);

    let result = tracker.handle_announce(announce, &common::passkey()).await.unwrap();
    assert_eq!(result.peers.len(), 50);
    assert_eq!(result.stats.complete, 60);
}

#[tokio::test]
async fn test_scrape_unknown_hash_reports_zeroes() {
    let tracker = common::create_test_tracker();
    let known = common::random_info_hash();
    let unknown = common::random_info_hash();
    let announce = common::create_announce(known, common::random_peer_id(), common::peer_addr(1), 0, AnnounceEvent::Started);
    tracker.handle_announce(announce, &common::passkey()).await.unwrap();

    let scrape = ScrapeQueryRequest { info_hash: vec![known, unknown] };
    let files = tracker.handle_scrape(scrape, &common::passkey()).await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[&known], SwarmStats { complete: 1, incomplete: 0, downloaded: 0 });
    assert_eq!(files[&unknown], SwarmStats::default());
    assert!(tracker.get_torrent(&unknown).is_none());
    assert_eq!(tracker.get_stats().scrapes, 1);
}

#[tokio::test]
async fn test_unknown_passkey_is_refused() {
    let parts = common::create_clocked_tracker();
    let info_hash = common::random_info_hash();
    let stranger = Passkey::new("somebodyelse").unwrap();

    let announce = common::create_announce(info_hash, common::random_peer_id(), common::peer_addr(1), 0, AnnounceEvent::Started);
    let error = parts.tracker.handle_announce(announce.clone(), &stranger).await.unwrap_err();
    assert_eq!(error, TrackerError::InvalidAuth);
    assert!(parts.tracker.get_torrent(&info_hash).is_none());
    assert_eq!(parts.tracker.get_stats().auth_failures, 1);

    assert!(parts.authorization.add_passkey(&stranger));
    assert!(parts.tracker.handle_announce(announce.clone(), &stranger).await.is_ok());

    assert!(parts.authorization.remove_passkey(&stranger));
    assert_eq!(parts.authorization.get_passkeys_amount(), 1);
    let scrape = ScrapeQueryRequest { info_hash: vec![info_hash] };
    assert_eq!(parts.tracker.handle_scrape(scrape, &stranger).await.unwrap_err(), TrackerError::InvalidAuth);
}

#[tokio::test]
async fn test_stale_peers_evicted_after_timeout() {
    let parts = common::create_clocked_tracker();
    let info_hash = common::random_info_hash();
    let stale = common::create_announce(info_hash, common::random_peer_id(), common::peer_addr(1), 0, AnnounceEvent::Started);
    parts.tracker.handle_announce(stale, &common::passkey()).await.unwrap();

    parts.clock.advance(Duration::from_secs(2000));
    let fresh = common::create_announce(info_hash, common::random_peer_id(), common::peer_addr(2), 10, AnnounceEvent::Started);
    parts.tracker.handle_announce(fresh, &common::passkey()).await.unwrap();

    let cleanup = parts.tracker.remove_stale_peers();
    assert_eq!(cleanup.seeds, 0);
    assert_eq!(cleanup.peers, 0);

    // Default peers_timeout is 2700 seconds.
    parts.clock.advance(Duration::from_secs(701));
    let cleanup = parts.tracker.remove_stale_peers();
    assert_eq!(cleanup.torrents, 1);
    assert_eq!(cleanup.seeds, 1);
    assert_eq!(cleanup.peers, 0);

    let stats = parts.tracker.get_torrent_stats(&info_hash).unwrap();
    assert_eq!(stats.complete, 0);
    assert_eq!(stats.incomplete, 1);
    assert_eq!(parts.tracker.get_stats().seeds, 0);
    assert_eq!(parts.tracker.get_stats().peers, 1);
    assert_eq!(parts.tracker.get_torrents_amount(), 1);
}

#[tokio::test]
async fn test_disabled_swarm_refuses_announces() {
    let tracker = common::create_test_tracker();
    let info_hash = common::random_info_hash();
    let announce = common::create_announce(info_hash, common::random_peer_id(), common::peer_addr(1), 10, AnnounceEvent::Started);
    tracker.handle_announce(announce.clone(), &common::passkey()).await.unwrap();

    let status = tracker.update_torrent(info_hash, TorrentPatch { enabled: Some(false), downloaded: None });
    assert!(!status.enabled);
    assert_eq!(status.incomplete, 1);

    let error = tracker.handle_announce(announce.clone(), &common::passkey()).await.unwrap_err();
    assert_eq!(error, TrackerError::InvalidAuth);
    assert_eq!(error.code(), 490);

    tracker.update_torrent(info_hash, TorrentPatch { enabled: Some(true), downloaded: None });
    assert!(tracker.handle_announce(announce, &common::passkey()).await.is_ok());
}

#[tokio::test]
async fn test_rate_limit_only_applies_to_regular_announces() {
    let mut config = common::create_test_config();
    config.tracker_config.announce_rate_limit = 30;
    let parts = common::create_controlled_tracker(config, Arc::new(swarm_tracker::tracker::structs::no_persistence::NoPersistence));
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    let addr = common::peer_addr(1);

    let started = common::create_announce(info_hash, peer_id, addr, 10, AnnounceEvent::Started);
    parts.tracker.handle_announce(started, &common::passkey()).await.unwrap();

    parts.clock.advance(Duration::from_secs(5));
    let regular = common::create_announce(info_hash, peer_id, addr, 10, AnnounceEvent::None);
    assert_eq!(
        parts.tracker.handle_announce(regular.clone(), &common::passkey()).await.unwrap_err(),
        TrackerError::ClientRequestTooFast
    );
    assert_eq!(parts.tracker.get_stats().rate_limited, 1);

    let completed = common::create_announce(info_hash, peer_id, addr, 0, AnnounceEvent::Completed);
    assert!(parts.tracker.handle_announce(completed, &common::passkey()).await.is_ok());

    parts.clock.advance(Duration::from_secs(30));
    assert!(parts.tracker.handle_announce(regular, &common::passkey()).await.is_ok());
}

#[tokio::test]
async fn test_delete_and_patch_torrent() {
    let tracker = common::create_test_tracker();
    let info_hash = common::random_info_hash();

    assert_eq!(tracker.delete_torrent(info_hash).unwrap_err(), TrackerError::InfoHashNotFound);

    for index in 0..4u32 {
        let announce = common::create_announce(info_hash, common::random_peer_id(), common::peer_addr(index), index as u64 % 2, AnnounceEvent::Started);
        tracker.handle_announce(announce, &common::passkey()).await.unwrap();
    }
    let status = tracker.update_torrent(info_hash, TorrentPatch { enabled: None, downloaded: Some(42) });
    assert_eq!(status.downloaded, 42);
    assert_eq!(tracker.get_stats().completed, 42);

    let status = tracker.delete_torrent(info_hash).unwrap();
    assert_eq!(status.complete, 2);
    assert_eq!(status.incomplete, 2);
    assert!(tracker.get_torrent(&info_hash).is_none());

    let stats = tracker.get_stats();
    assert_eq!(stats.torrents, 0);
    assert_eq!(stats.seeds, 0);
    assert_eq!(stats.peers, 0);
}

#[tokio::test]
async fn test_delete_racing_announces_keeps_counters_consistent() {
    let tracker = common::create_test_tracker();
    let info_hash = common::random_info_hash();

    let mut handles = Vec::new();
    for index in 0..400u32 {
        let tracker = tracker.clone();
        handles.push(tokio::spawn(async move {
            if index % 50 == 0 {
                let _ = tracker.delete_torrent(info_hash);
                return;
            }
            let announce = common::create_announce(info_hash, common::random_peer_id(), common::peer_addr(index), (index % 3) as u64, AnnounceEvent::Started);
            tracker.handle_announce(announce, &common::passkey()).await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let stats = tracker.get_stats();
    let swarm = tracker.get_torrent_stats(&info_hash).unwrap_or_default();
    assert_eq!(stats.seeds, swarm.complete as i64);
    assert_eq!(stats.peers, swarm.incomplete as i64);
    assert_eq!(stats.torrents, tracker.get_torrents_amount() as i64);
}

#[tokio::test]
async fn test_file_persistence_survives_restart() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("torrents.json");
    let mut config = common::create_test_config();
    config.persistence.enabled = true;
    config.persistence.path = path.display().to_string();

    let info_hash = common::random_info_hash();
    let disabled = common::random_info_hash();
    let peer_id = common::random_peer_id();
    let addr = common::peer_addr(1);
    {
        let parts = common::create_controlled_tracker(config.clone(), Arc::new(FilePersistence::new(&path)));
        let announce = common::create_announce(info_hash, peer_id, addr, 0, AnnounceEvent::Completed);
        parts.tracker.handle_announce(announce, &common::passkey()).await.unwrap();
        parts.tracker.update_torrent(disabled, TorrentPatch { enabled: Some(false), downloaded: Some(7) });
        assert_eq!(parts.tracker.get_torrent_updates_amount(), 2);
        assert_eq!(parts.tracker.save_torrent_updates().await.unwrap(), 2);
        assert_eq!(parts.tracker.get_torrent_updates_amount(), 0);
    }
    assert!(path.exists());

    let parts = common::create_controlled_tracker(config, Arc::new(FilePersistence::new(&path)));
    assert_eq!(parts.tracker.load_torrents().await.unwrap(), 2);
    assert_eq!(parts.tracker.get_torrent_stats(&info_hash).unwrap().downloaded, 1);
    assert!(!parts.tracker.get_torrent_status(&disabled).unwrap().enabled);
    assert_eq!(parts.tracker.get_stats().completed, 8);

    // A restored completion is not counted twice.
    let announce = common::create_announce(info_hash, peer_id, addr, 0, AnnounceEvent::Completed);
    let result = parts.tracker.handle_announce(announce, &common::passkey()).await.unwrap();
    assert_eq!(result.stats.downloaded, 1);

    parts.tracker.delete_torrent(disabled).unwrap();
    parts.tracker.save_torrent_updates().await.unwrap();
    let stored = FilePersistence::new(&path).load_torrents().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].0, info_hash);
}

#[tokio::test]
async fn test_updates_not_queued_without_persistence() {
    let tracker = common::create_test_tracker();
    let announce = common::create_announce(common::random_info_hash(), common::random_peer_id(), common::peer_addr(1), 0, AnnounceEvent::Completed);
    tracker.handle_announce(announce, &common::passkey()).await.unwrap();
    assert_eq!(tracker.get_torrent_updates_amount(), 0);
    assert_eq!(tracker.save_torrent_updates().await.unwrap(), 0);
}
