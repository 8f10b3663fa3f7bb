use serde::{Deserialize, Serialize};

/// Fields an admin may change on a swarm. Absent fields are left untouched.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
pub struct TorrentPatch {
    pub enabled: Option<bool>,
    pub downloaded: Option<u64>,
}
