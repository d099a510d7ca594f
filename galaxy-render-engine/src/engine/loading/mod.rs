//! Configuration loading before the galaxy is built.

/// Loads `galaxy.json` and seeds the galaxy resources from it.
pub mod config_loader;
