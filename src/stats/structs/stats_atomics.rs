use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_save: AtomicI64,
    pub timestamp_run_timeout: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub torrents: AtomicI64,
    pub torrents_updates: AtomicI64,
    pub seeds: AtomicI64,
    pub peers: AtomicI64,
    pub completed: AtomicI64,
    pub announces: AtomicI64,
    pub scrapes: AtomicI64,
    pub failures: AtomicI64,
    pub auth_failures: AtomicI64,
    pub rate_limited: AtomicI64,
    pub not_found: AtomicI64,
    pub api_handled: AtomicI64,
}
