use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use crate::tracker::structs::stopped_clock::StoppedClock;
use crate::tracker::traits::clock::Clock;

impl StoppedClock {
    pub fn new(now: Duration) -> StoppedClock
    {
        StoppedClock { millis: AtomicU64::new(now.as_millis() as u64) }
    }

    pub fn set(&self, now: Duration)
    {
        self.millis.store(now.as_millis() as u64, Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration)
    {
        self.millis.fetch_add(by.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Clock for StoppedClock {
    fn now(&self) -> Duration
    {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}
