use std::path::PathBuf;
use tokio::sync::Mutex;

/// Swarm snapshots kept in a single JSON document, keyed by hex info hash.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a crash mid-write leaves the previous document intact.
#[derive(Debug)]
pub struct FilePersistence {
    pub(crate) path: PathBuf,
    pub(crate) write_lock: Mutex<()>,
}
