use std::time::{Duration, SystemTime};
use crate::tracker::structs::system_clock::SystemClock;
use crate::tracker::traits::clock::Clock;

impl Clock for SystemClock {
    fn now(&self) -> Duration
    {
        SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default()
    }
}
