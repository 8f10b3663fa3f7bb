use parking_lot::RwLock;
use crate::tracker::types::ahash_map::AHashSet;

/// Passkeys registered in memory. A registered passkey may announce and
/// scrape any info hash.
#[derive(Debug, Default)]
pub struct MemoryAuthorization {
    pub(crate) passkeys: RwLock<AHashSet<String>>,
}
