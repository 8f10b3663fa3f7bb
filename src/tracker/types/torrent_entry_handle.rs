use std::sync::Arc;
use parking_lot::Mutex;
use crate::tracker::structs::torrent_entry::TorrentEntry;

pub type TorrentEntryHandle = Arc<Mutex<TorrentEntry>>;
