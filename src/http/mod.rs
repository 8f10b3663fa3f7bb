//! Private tracker HTTP endpoints.
//!
//! The passkey is part of the route, so every tracker request carries its
//! credential before the query is even parsed.
//!
//! # Endpoints
//!
//! - `/{passkey}/announce` - Peer announcements
//! - `/{passkey}/scrape` - Swarm counters for one or more info hashes
//! - `/announce`, `/scrape` - Rejected, a passkey is required
//!
//! # Response Format
//!
//! Bencoded dictionaries. Failures carry a `failure reason` and an HTTP
//! status derived from the error class.

/// Data structures for HTTP request handling.
pub mod structs;

/// Bencoded announce, scrape and failure bodies.
pub mod encoder;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
