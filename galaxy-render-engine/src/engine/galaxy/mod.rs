//! Galaxy point cloud: shading material, quad mesh, renderable lifecycle and
//! the systems that regenerate and animate it.

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;

pub mod backend;
pub mod context;
pub mod lifecycle;
pub mod material;
pub mod mesh;
pub mod renderer;
pub mod systems;

use lifecycle::Galaxy;
use material::GalaxyMaterial;
use systems::{
    GalaxyRegenerated, RegenerateGalaxy, dispose_galaxy_on_exit, regenerate_galaxy,
    update_galaxy_time,
};

pub struct GalaxyPlugin;

impl Plugin for GalaxyPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<GalaxyMaterial>::default())
            .add_event::<RegenerateGalaxy>()
            .add_event::<GalaxyRegenerated>()
            .add_systems(
                Update,
                (regenerate_galaxy, update_galaxy_time)
                    .chain()
                    .run_if(in_state(AppState::Running))
                    .run_if(resource_exists::<Galaxy>),
            )
            .add_systems(Last, dispose_galaxy_on_exit);
    }
}
