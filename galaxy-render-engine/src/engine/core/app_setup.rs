use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::assets::galaxy_config::GalaxyConfig;
use crate::engine::camera::orbit_camera::{camera_controller, spawn_camera};
use crate::engine::core::app_state::AppState;
use crate::engine::core::window_config::create_window_config;
use crate::engine::galaxy::GalaxyPlugin;
use crate::engine::loading::config_loader::{ConfigLoader, apply_galaxy_config, start_loading};
use crate::engine::scene::world::spawn_world;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::tuning::TuningPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers GalaxyConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<GalaxyConfig>::new(&["json"]))
        .add_plugins(GalaxyPlugin)
        .add_plugins(WebRpcPlugin)
        .add_plugins(TuningPlugin)
        .init_resource::<ConfigLoader>();

    app.add_systems(Startup, (spawn_camera, spawn_world, start_loading))
        .add_systems(
            Update,
            apply_galaxy_config.run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            (fps_notification_system, camera_controller).run_if(in_state(AppState::Running)),
        );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_fps_overlay)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_fps_overlay(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
