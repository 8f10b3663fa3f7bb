//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Each variant selects one counter of
/// [`StatsAtomics`](crate::stats::structs::stats_atomics::StatsAtomics).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Torrents,
    TorrentsUpdates,
    Seeds,
    Peers,
    Completed,
    Announces,
    Scrapes,
    Failures,
    AuthFailures,
    RateLimited,
    NotFound,
    ApiHandled,
    TimestampSave,
    TimestampTimeout,
    TimestampConsole,
}
