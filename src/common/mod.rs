//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Query string parsing
//! - Reporting IP resolution
//! - Hex formatting
//! - Logging setup
//! - Graceful shutdown waiting
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::common::common::parse_query;
//!
//! let params = parse_query(Some("info_hash=%ab%cd&port=6881")).unwrap();
//! assert_eq!(params["info_hash"][0], vec![0xab, 0xcd]);
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
