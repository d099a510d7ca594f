use bevy::prelude::*;
use constants::render_settings::BASE_POINT_SIZE;
use galaxy_generator::GenerationParameters;
use serde::{Deserialize, Serialize};

/// Galaxy configuration as a Bevy asset. Mirrors `assets/galaxy.json`.
/// Missing fields fall back to the built-in defaults.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub parameters: GenerationParameters,
    /// Fixed seed for reproducible galaxies; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Point size in pixels before the window scale factor is applied.
    pub base_point_size: f32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            parameters: GenerationParameters::default(),
            seed: None,
            base_point_size: BASE_POINT_SIZE,
        }
    }
}
