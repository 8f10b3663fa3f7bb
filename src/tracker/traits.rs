//! Collaborators the tracker engine consumes.
//!
//! All three are injected into [`TorrentTracker`](crate::tracker::structs::torrent_tracker::TorrentTracker)
//! as trait objects. Async collaborators are never awaited while a swarm lock is held.

/// Passkey gate for announce and scrape.
pub mod authorization_provider;

/// Optional write-through of swarm changes to durable storage.
pub mod persistence_sync;

/// Source of announce timestamps.
pub mod clock;
