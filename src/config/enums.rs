//! Configuration enumerations.

/// Errors raised while loading, validating or applying configuration.
pub mod configuration_error;
