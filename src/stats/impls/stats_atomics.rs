use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new(started: i64) -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(started, Ordering::SeqCst);
        stats
    }

    pub fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::Torrents => &self.torrents,
            StatsEvent::TorrentsUpdates => &self.torrents_updates,
            StatsEvent::Seeds => &self.seeds,
            StatsEvent::Peers => &self.peers,
            StatsEvent::Completed => &self.completed,
            StatsEvent::Announces => &self.announces,
            StatsEvent::Scrapes => &self.scrapes,
            StatsEvent::Failures => &self.failures,
            StatsEvent::AuthFailures => &self.auth_failures,
            StatsEvent::RateLimited => &self.rate_limited,
            StatsEvent::NotFound => &self.not_found,
            StatsEvent::ApiHandled => &self.api_handled,
            StatsEvent::TimestampSave => &self.timestamp_run_save,
            StatsEvent::TimestampTimeout => &self.timestamp_run_timeout,
            StatsEvent::TimestampConsole => &self.timestamp_run_console,
        }
    }

    pub fn snapshot(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            timestamp_run_save: self.timestamp_run_save.load(Ordering::SeqCst),
            timestamp_run_timeout: self.timestamp_run_timeout.load(Ordering::SeqCst),
            timestamp_run_console: self.timestamp_run_console.load(Ordering::SeqCst),
            torrents: self.torrents.load(Ordering::SeqCst),
            torrents_updates: self.torrents_updates.load(Ordering::SeqCst),
            seeds: self.seeds.load(Ordering::SeqCst),
            peers: self.peers.load(Ordering::SeqCst),
            completed: self.completed.load(Ordering::SeqCst),
            announces: self.announces.load(Ordering::SeqCst),
            scrapes: self.scrapes.load(Ordering::SeqCst),
            failures: self.failures.load(Ordering::SeqCst),
            auth_failures: self.auth_failures.load(Ordering::SeqCst),
            rate_limited: self.rate_limited.load(Ordering::SeqCst),
            not_found: self.not_found.load(Ordering::SeqCst),
            api_handled: self.api_handled.load(Ordering::SeqCst),
        }
    }
}
