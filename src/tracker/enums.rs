//! Enumerations for tracker operations.
//!
//! Announce events, pending update actions and the classified error
//! taxonomy returned by every engine operation.

/// Announce event types from the BitTorrent protocol.
///
/// - `None` - Regular interval announce
/// - `Started` - First announce of a download
/// - `Stopped` - Peer leaves the swarm
/// - `Completed` - Download finished (counted once per peer)
pub mod announce_event;

/// Pending persistence action types.
///
/// - `Add` - Swarm was created
/// - `Update` - Swarm metadata changed
/// - `Remove` - Swarm was deleted
pub mod updates_action;

/// Tracker error taxonomy with stable numeric codes.
pub mod tracker_error;

/// Error classes used for logging severity and HTTP status mapping.
pub mod error_class;
