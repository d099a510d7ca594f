//! Static world objects around the galaxy.

/// World object descriptions, shadow flags and lighting.
pub mod world;
