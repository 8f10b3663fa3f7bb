//! Configuration implementation blocks.

/// Loading, saving, defaults and validation of `Configuration`.
pub mod configuration;
