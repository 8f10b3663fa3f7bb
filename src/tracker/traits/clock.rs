use std::time::Duration;

pub trait Clock: Send + Sync {
    /// Time elapsed since the UNIX epoch.
    fn now(&self) -> Duration;
}
