//! Tracker error taxonomy.

use thiserror::Error;

/// Every failure an announce, scrape or admin operation can produce.
///
/// The `Display` output of each variant is the exact `failure reason` sent to
/// clients. Internal errors carry a detail string that is only ever logged.
///
/// | Code | Variant |
/// |------|---------|
/// | 100 | `InvalidReqType` |
/// | 101 | `MissingInfoHash` |
/// | 102 | `MissingPeerID` |
/// | 103 | `MissingPort` |
/// | 104 | `InvalidPort` |
/// | 150 | `InvalidInfoHash` |
/// | 151 | `InvalidPeerID` |
/// | 152 | `InvalidNumWant` |
/// | 480 | `InfoHashNotFound` |
/// | 490 | `InvalidAuth` |
/// | 500 | `ClientRequestTooFast` |
/// | 900 | `GenericError` |
/// | 901 | `MalformedRequest` |
/// | 902 | `QueryParseFail` |
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Invalid request type")]
    InvalidReqType,
    #[error("info_hash missing")]
    MissingInfoHash,
    #[error("peer_id missing")]
    MissingPeerID,
    #[error("port missing")]
    MissingPort,
    #[error("Invalid port")]
    InvalidPort,
    #[error("info_hash wrong length")]
    InvalidInfoHash,
    #[error("Invalid peer_id")]
    InvalidPeerID,
    #[error("Invalid numwant")]
    InvalidNumWant,
    #[error("Unknown info_hash")]
    InfoHashNotFound,
    #[error("Invalid passkey")]
    InvalidAuth,
    #[error("Rate limited")]
    ClientRequestTooFast,
    #[error("Generic error")]
    GenericError(String),
    #[error("Malformed request")]
    MalformedRequest,
    #[error("Query parse failure")]
    QueryParseFail,
}
