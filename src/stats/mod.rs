//! Process-wide statistics.
//!
//! Atomic counters for swarm totals and request outcomes, readable as a
//! [`Stats`](structs::stats::Stats) snapshot through the admin API and the
//! console logger.
//!
//! # Thread Safety
//!
//! Swarm totals (seeds, peers, completed) are adjusted inside the same swarm
//! critical section that changed them. Request counters are plain relaxed
//! increments.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::Announces, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;
