use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::backend::SceneBackend;
use super::material::GalaxyMaterial;

/// Everything the galaxy needs from the running app: scene registry,
/// asset stores, time source and the display it renders to.
#[derive(SystemParam)]
pub struct GalaxyContext<'w, 's> {
    commands: Commands<'w, 's>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<GalaxyMaterial>>,
    time: Res<'w, Time>,
    windows: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
}

impl<'w, 's> GalaxyContext<'w, 's> {
    /// Display scale factor, 1.0 when no primary window exists (headless).
    pub fn pixel_ratio(&self) -> f32 {
        self.windows
            .single()
            .map(|window| window.scale_factor())
            .unwrap_or(1.0)
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.time.elapsed_secs()
    }

    pub fn backend(&mut self, base_point_size: f32) -> SceneBackend<'_, 'w, 's> {
        let point_size = base_point_size * self.pixel_ratio();
        SceneBackend {
            commands: &mut self.commands,
            meshes: &mut self.meshes,
            materials: &mut self.materials,
            point_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::SystemState;
    use bevy::window::WindowResolution;
    use constants::render_settings::BASE_POINT_SIZE;
    use galaxy_generator::{GenerationParameters, generate_with_rng};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::engine::galaxy::backend::{GalaxyHandle, GalaxyPoints, PointCloudBackend};

    type ContextState = SystemState<GalaxyContext<'static, 'static>>;

    fn scene_world(scale_factor: Option<f32>) -> World {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<GalaxyMaterial>>();
        world.init_resource::<Time>();
        if let Some(scale_factor) = scale_factor {
            world.spawn((
                Window {
                    resolution: WindowResolution::default()
                        .with_scale_factor_override(scale_factor),
                    ..default()
                },
                PrimaryWindow,
            ));
        }
        world
    }

    fn build_galaxy(world: &mut World, state: &mut ContextState) -> GalaxyHandle {
        let params = GenerationParameters {
            count: 32,
            ..GenerationParameters::default()
        };
        let buffers = generate_with_rng(&params, &mut StdRng::seed_from_u64(3)).unwrap();

        let handle = {
            let mut context = state.get_mut(world);
            context.backend(BASE_POINT_SIZE).build(&buffers)
        };
        state.apply(world);
        handle
    }

    #[test]
    fn point_size_follows_window_scale_factor() {
        let mut world = scene_world(Some(2.0));
        let mut state = ContextState::new(&mut world);

        assert_eq!(state.get_mut(&mut world).pixel_ratio(), 2.0);

        let handle = build_galaxy(&mut world, &mut state);
        let materials = world.resource::<Assets<GalaxyMaterial>>();
        let material = materials.get(&handle.material).unwrap();
        assert_eq!(material.uniforms.size, BASE_POINT_SIZE * 2.0);
        assert_eq!(material.uniforms.time, 0.0);
    }

    #[test]
    fn headless_point_size_uses_unit_ratio() {
        let mut world = scene_world(None);
        let mut state = ContextState::new(&mut world);

        assert_eq!(state.get_mut(&mut world).pixel_ratio(), 1.0);

        let handle = build_galaxy(&mut world, &mut state);
        let materials = world.resource::<Assets<GalaxyMaterial>>();
        assert_eq!(
            materials.get(&handle.material).unwrap().uniforms.size,
            BASE_POINT_SIZE
        );
    }

    #[test]
    fn set_time_reaches_the_material() {
        let mut world = scene_world(None);
        let mut state = ContextState::new(&mut world);
        let handle = build_galaxy(&mut world, &mut state);

        {
            let mut context = state.get_mut(&mut world);
            context.backend(BASE_POINT_SIZE).set_time(&handle, 4.5);
        }
        state.apply(&mut world);

        let materials = world.resource::<Assets<GalaxyMaterial>>();
        assert_eq!(materials.get(&handle.material).unwrap().uniforms.time, 4.5);
    }

    #[test]
    fn dispose_releases_assets_and_despawns() {
        let mut world = scene_world(Some(1.5));
        let mut state = ContextState::new(&mut world);
        let handle = build_galaxy(&mut world, &mut state);

        let mut points = world.query_filtered::<Entity, With<GalaxyPoints>>();
        assert_eq!(points.iter(&world).collect::<Vec<_>>(), vec![handle.entity]);
        assert!(world.resource::<Assets<Mesh>>().get(&handle.mesh).is_some());

        {
            let mut context = state.get_mut(&mut world);
            context.backend(BASE_POINT_SIZE).dispose(handle.clone());
        }
        state.apply(&mut world);

        assert!(world.resource::<Assets<Mesh>>().get(&handle.mesh).is_none());
        assert!(
            world
                .resource::<Assets<GalaxyMaterial>>()
                .get(&handle.material)
                .is_none()
        );
        assert!(world.get_entity(handle.entity).is_err());
        assert_eq!(points.iter(&world).count(), 0);
    }
}
