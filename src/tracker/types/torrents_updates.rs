//! Type alias for pending swarm persistence updates.

use std::sync::Arc;
use parking_lot::Mutex;
use crate::tracker::enums::updates_action::UpdatesAction;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::types::ahash_map::AHashMap;

/// Swarms changed since the last flush.
///
/// Only the latest action per info hash is kept; the snapshot itself is taken
/// at flush time so repeated changes to one swarm cost a single write.
pub type TorrentsUpdates = Arc<Mutex<AHashMap<InfoHash, UpdatesAction>>>;
