//! Shared configuration for galaxy generation, live tuning and rendering.

pub mod galaxy;
pub mod render_settings;
pub mod tuning;
