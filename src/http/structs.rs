//! Data structures for the HTTP tracker service.

/// Shared state handed to every HTTP worker.
pub mod http_service_data;
