//! Asset type definitions loaded from JSON.

/// Galaxy configuration asset: initial generation parameters, seed and point size.
pub mod galaxy_config;
