mod common;

use swarm_tracker::stats::enums::stats_event::StatsEvent;
use swarm_tracker::tracker::enums::announce_event::AnnounceEvent;

#[tokio::test]
async fn test_stats_initial_values() {
    let tracker = common::create_test_tracker();
    let stats = tracker.get_stats();

    assert_eq!(stats.torrents, 0, "Initial torrents count should be 0");
    assert_eq!(stats.seeds, 0, "Initial seeds count should be 0");
    assert_eq!(stats.peers, 0, "Initial peers count should be 0");
    assert_eq!(stats.completed, 0, "Initial completed count should be 0");
    assert!(stats.started > 0);
}

#[tokio::test]
async fn test_stats_increment_decrement() {
    let tracker = common::create_test_tracker();

    assert_eq!(tracker.update_stats(StatsEvent::Failures, 5), 5);
    assert_eq!(tracker.update_stats(StatsEvent::Failures, -2), 3);
    assert_eq!(tracker.update_stats(StatsEvent::Failures, 0), 3);
    assert_eq!(tracker.set_stats(StatsEvent::TimestampSave, 1234), 1234);
    assert_eq!(tracker.get_stats().timestamp_run_save, 1234);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_stats_concurrent_updates() {
    let tracker = common::create_test_tracker();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let tracker = tracker.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..100 {
                tracker.update_stats(StatsEvent::Announces, 1);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    assert_eq!(tracker.get_stats().announces, 1000);
}

#[tokio::test]
async fn test_stats_follow_peer_transitions() {
    let tracker = common::create_test_tracker();
    let info_hash = common::random_info_hash();
    let peer_id = common::random_peer_id();
    let addr = common::peer_addr(1);

    let started = common::create_announce(info_hash, peer_id, addr, 100, AnnounceEvent::Started);
    tracker.handle_announce(started, &common::passkey()).await.unwrap();
    let stats = tracker.get_stats();
    assert_eq!((stats.seeds, stats.peers, stats.completed), (0, 1, 0));

    let completed = common::create_announce(info_hash, peer_id, addr, 0, AnnounceEvent::Completed);
    tracker.handle_announce(completed, &common::passkey()).await.unwrap();
    let stats = tracker.get_stats();
    assert_eq!((stats.seeds, stats.peers, stats.completed), (1, 0, 1));

    let stopped = common::create_announce(info_hash, peer_id, addr, 0, AnnounceEvent::Stopped);
    tracker.handle_announce(stopped, &common::passkey()).await.unwrap();
    let stats = tracker.get_stats();
    assert_eq!((stats.seeds, stats.peers, stats.completed), (0, 0, 1));
    assert_eq!(stats.torrents, 1);
    assert_eq!(stats.announces, 3);
}
