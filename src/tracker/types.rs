//! Type aliases for shared tracker collections.

/// `ahash` backed map and set aliases.
pub mod ahash_map;

/// Pending swarm changes waiting for the persistence flush.
pub mod torrents_updates;

/// Shared handle to one swarm.
pub mod torrent_entry_handle;
