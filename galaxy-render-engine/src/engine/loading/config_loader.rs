use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::render_settings::GALAXY_CONFIG_PATH;

use crate::engine::assets::galaxy_config::GalaxyConfig;
use crate::engine::core::app_state::AppState;
use crate::engine::galaxy::lifecycle::{Galaxy, GalaxyLifecycle};
use crate::engine::galaxy::systems::{GalaxyRenderSettings, RegenerateGalaxy};

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<GalaxyConfig>>,
}

// Start the loading process
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    config_loader.handle = Some(asset_server.load(GALAXY_CONFIG_PATH));
}

/// Wait for the config to load (or fail), then install the galaxy and
/// request the first build.
pub fn apply_galaxy_config(
    config_loader: Res<ConfigLoader>,
    configs: Res<Assets<GalaxyConfig>>,
    asset_server: Res<AssetServer>,
    mut commands: Commands,
    mut regenerate: EventWriter<RegenerateGalaxy>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(handle) = &config_loader.handle else {
        return;
    };

    let config = if let Some(config) = configs.get(handle) {
        info!("✓ Galaxy config loaded from {}", GALAXY_CONFIG_PATH);
        config.clone()
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        warn!(
            "Galaxy config {} failed to load ({}), using defaults",
            GALAXY_CONFIG_PATH, err
        );
        GalaxyConfig::default()
    } else {
        return;
    };

    install_galaxy(&mut commands, config);
    regenerate.write(RegenerateGalaxy);
    next_state.set(AppState::Running);
}

fn install_galaxy(commands: &mut Commands, config: GalaxyConfig) {
    commands.insert_resource(GalaxyRenderSettings {
        base_point_size: config.base_point_size,
    });
    commands.insert_resource(Galaxy(GalaxyLifecycle::new(
        config.parameters,
        config.seed,
    )));
}
