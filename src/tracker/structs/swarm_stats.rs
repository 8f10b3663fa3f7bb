use serde::{Deserialize, Serialize};

/// Aggregate counters of one swarm, as reported by announce and scrape.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct SwarmStats {
    pub complete: u64,
    pub incomplete: u64,
    pub downloaded: u64,
}
