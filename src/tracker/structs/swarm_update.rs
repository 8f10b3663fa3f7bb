use serde::Serialize;
use crate::tracker::enums::updates_action::UpdatesAction;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_snapshot::TorrentSnapshot;

/// A change handed to the persistence collaborator. `snapshot` is `None`
/// for [`UpdatesAction::Remove`].
#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
pub struct SwarmUpdate {
    pub info_hash: InfoHash,
    pub action: UpdatesAction,
    pub snapshot: Option<TorrentSnapshot>,
}
