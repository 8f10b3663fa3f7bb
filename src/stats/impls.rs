//! Statistics implementation blocks.

/// `TorrentTracker` statistics accessors.
pub mod torrent_tracker;

/// `StatsAtomics` construction and counter lookup.
pub mod stats_atomics;
