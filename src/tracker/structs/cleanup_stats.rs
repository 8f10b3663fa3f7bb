/// Totals of one stale peer sweep.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct CleanupStats {
    pub torrents: u64,
    pub seeds: u64,
    pub peers: u64,
}
