//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the "info" dictionary in a torrent file.
/// It keys the swarm registry; its first byte selects the shard.
///
/// # Example
///
/// ```rust
/// use swarm_tracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0u8; 20]);
/// assert_eq!(hash.to_string().len(), 40);
/// ```
///
/// # Serialization
///
/// Serialized as a 40-character lowercase hexadecimal string.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
