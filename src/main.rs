use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use swarm_tracker::api::api::api_service;
use swarm_tracker::common::common::setup_logging;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::http::http::http_service;
use swarm_tracker::stats::enums::stats_event::StatsEvent;
use swarm_tracker::structs::Cli;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(error) => {
            eprintln!("{error}");
            exit(101)
        }
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(101)
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(TorrentTracker::from_config(config.clone()));

            if config.persistence.enabled {
                if let Err(error) = tracker.load_torrents().await {
                    error!("[BOOT] Unable to load torrents: {}", error.detail().unwrap_or_default());
                    exit(1);
                }
            }

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown handler");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                warn!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    warn!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        warn!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        warn!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut server_handles = Vec::new();
            let mut server_futures = Vec::new();

            for api_server_object in &config.api_server {
                if api_server_object.enabled {
                    let address: SocketAddr = match api_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(_) => {
                            error!("[API] Invalid bind address {}", api_server_object.bind_address);
                            exit(1);
                        }
                    };
                    let (handle, future) = api_service(address, tracker.clone(), api_server_object.clone())?;
                    server_handles.push(handle);
                    server_futures.push(future);
                }
            }

            for http_server_object in &config.http_server {
                if http_server_object.enabled {
                    let address: SocketAddr = match http_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(_) => {
                            error!("[HTTP] Invalid bind address {}", http_server_object.bind_address);
                            exit(1);
                        }
                    };
                    let (handle, future) = http_service(address, tracker.clone(), http_server_object.clone())?;
                    server_handles.push(handle);
                    server_futures.push(future);
                }
            }

            if !server_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(server_futures).await {
                        error!("[BOOT] Server stopped with an error: {error}");
                    }
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp() + console_interval as i64);
                            let stats = tracker_spawn_stats.get_stats();
                            info!(
                                "[STATS] Torrents: {} - Updates: {} - Seeds: {} - Peers: {} - Completed: {}",
                                stats.torrents, stats.torrents_updates, stats.seeds, stats.peers, stats.completed
                            );
                            info!(
                                "[STATS] Announces: {} - Scrapes: {} - Failures: {} - Auth failures: {} - Rate limited: {} - Not found: {} - API: {}",
                                stats.announces, stats.scrapes, stats.failures, stats.auth_failures,
                                stats.rate_limited, stats.not_found, stats.api_handled
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let cleanup_interval = config.tracker_config.peers_cleanup_interval;
            info!("[BOOT] Starting thread for peers cleanup with {cleanup_interval} seconds delay...");
            tokio::spawn(tracker.clone().peers_cleanup(tokio_shutdown.clone()));

            if config.persistence.enabled {
                info!("[BOOT] Starting thread for torrent updates with {} seconds delay...", config.persistence.interval);
                tokio::spawn(tracker.clone().torrents_updates_sync(tokio_shutdown.clone()));
            }

            tokio::signal::ctrl_c().await?;
            info!("Shutdown request received, shutting down...");

            for handle in server_handles.iter() {
                handle.stop(true).await;
            }
            tokio_shutdown.handle().await;

            if config.persistence.enabled {
                info!("Saving final torrent updates...");
                match tracker.save_torrent_updates().await {
                    Ok(amount) => info!("[SYNC] Saved {amount} torrent updates"),
                    Err(error) => error!("[SYNC] Final save failed: {}", error.detail().unwrap_or_default()),
                }
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
