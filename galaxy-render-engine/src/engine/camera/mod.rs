//! Camera spawning and orbit controls.

/// Orbit camera around the galaxy centre with mouse drag and scroll zoom.
pub mod orbit_camera;
