//! Error classification.

/// How a [`TrackerError`](crate::tracker::enums::tracker_error::TrackerError) is treated
/// by the response layer.
///
/// Validation and authorization failures look identical to a client; the class
/// only decides the log level and the HTTP status.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ErrorClass {
    Validation,
    Authorization,
    RateLimit,
    Internal,
}
