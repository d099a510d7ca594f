//! Procedural spiral-galaxy point cloud generation.
//!
//! Produces the four parallel attribute arrays (position, jitter, colour,
//! scale) consumed by the galaxy shading pipeline. Rendering lives in the
//! render engine crate; nothing here depends on Bevy.

pub mod buffers;
pub mod colour;
pub mod error;
pub mod generator;
pub mod parameters;

pub use buffers::PointCloudBuffers;
pub use colour::Colour;
pub use error::{ColourParseError, GenerationError};
pub use generator::{branch_angle, generate, generate_with_rng};
pub use parameters::GenerationParameters;
