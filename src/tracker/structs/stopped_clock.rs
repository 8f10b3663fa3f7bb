use std::sync::atomic::AtomicU64;

/// Clock that only moves when told to, in milliseconds since the epoch.
#[derive(Debug, Default)]
pub struct StoppedClock {
    pub(crate) millis: AtomicU64,
}
