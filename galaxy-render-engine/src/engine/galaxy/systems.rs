use bevy::prelude::*;

use super::context::GalaxyContext;
use super::lifecycle::{Galaxy, GenerationReport};

/// Request a full rebuild from the current parameters.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RegenerateGalaxy;

/// Emitted after a rebuild completes.
#[derive(Event, Debug, Clone, Copy)]
pub struct GalaxyRegenerated(pub GenerationReport);

/// Point size before the display scale factor, from the galaxy config.
#[derive(Resource, Debug, Clone, Copy)]
pub struct GalaxyRenderSettings {
    pub base_point_size: f32,
}

pub fn regenerate_galaxy(
    mut requests: EventReader<RegenerateGalaxy>,
    mut galaxy: ResMut<Galaxy>,
    settings: Res<GalaxyRenderSettings>,
    mut context: GalaxyContext,
    mut regenerated: EventWriter<GalaxyRegenerated>,
) {
    // Several commits in one frame collapse into a single rebuild.
    if requests.read().count() == 0 {
        return;
    }

    let mut backend = context.backend(settings.base_point_size);
    match galaxy.regenerate(&mut backend) {
        Ok(report) => {
            info!(
                "Galaxy generation {} built with {} points",
                report.generation, report.point_count
            );
            regenerated.write(GalaxyRegenerated(report));
        }
        Err(err) => {
            error!(
                "Galaxy regeneration rejected, keeping generation {}: {}",
                galaxy.generation(),
                err
            );
        }
    }
}

pub fn update_galaxy_time(
    galaxy: Res<Galaxy>,
    settings: Res<GalaxyRenderSettings>,
    mut context: GalaxyContext,
) {
    let elapsed = context.elapsed_secs();
    galaxy.update(&mut context.backend(settings.base_point_size), elapsed);
}

pub fn dispose_galaxy_on_exit(
    mut exit_events: EventReader<AppExit>,
    galaxy: Option<ResMut<Galaxy>>,
    settings: Option<Res<GalaxyRenderSettings>>,
    mut context: GalaxyContext,
) {
    if exit_events.read().next().is_none() {
        return;
    }
    let (Some(mut galaxy), Some(settings)) = (galaxy, settings) else {
        return;
    };
    if !galaxy.is_built() {
        return;
    }

    galaxy.dispose(&mut context.backend(settings.base_point_size));
    info!("Galaxy disposed on exit");
}
