use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use galaxy_generator::PointCloudBuffers;

use super::material::GalaxyMaterial;
use super::mesh::create_galaxy_mesh;

/// Graphics-side operations the renderer needs. The Bevy implementation
/// spawns entities and assets; tests substitute a resource-tracking double.
pub trait PointCloudBackend {
    type Handle;

    /// Upload buffers, create the shading stage and attach the result to the scene.
    fn build(&mut self, buffers: &PointCloudBuffers) -> Self::Handle;

    /// Write elapsed seconds into the shading stage's time input.
    fn set_time(&mut self, handle: &Self::Handle, elapsed: f32);

    /// Release geometry and shading resources, then detach from the scene.
    fn dispose(&mut self, handle: Self::Handle);
}

#[derive(Component)]
pub struct GalaxyPoints;

/// Live galaxy entity together with the assets it owns.
#[derive(Debug, Clone)]
pub struct GalaxyHandle {
    pub entity: Entity,
    pub mesh: Handle<Mesh>,
    pub material: Handle<GalaxyMaterial>,
}

/// Backend over the Bevy scene. `point_size` is fixed when the backend is
/// created from the current window scale factor.
pub struct SceneBackend<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<GalaxyMaterial>,
    pub point_size: f32,
}

impl PointCloudBackend for SceneBackend<'_, '_, '_> {
    type Handle = GalaxyHandle;

    fn build(&mut self, buffers: &PointCloudBuffers) -> GalaxyHandle {
        let mesh = self.meshes.add(create_galaxy_mesh(buffers));
        let material = self.materials.add(GalaxyMaterial::new(self.point_size));

        let entity = self
            .commands
            .spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::IDENTITY,
                Visibility::Visible,
                GalaxyPoints,
                // Spin and jitter move points outside the mesh AABB.
                NoFrustumCulling,
                NotShadowCaster,
            ))
            .id();

        GalaxyHandle {
            entity,
            mesh,
            material,
        }
    }

    fn set_time(&mut self, handle: &GalaxyHandle, elapsed: f32) {
        if let Some(material) = self.materials.get_mut(&handle.material) {
            material.uniforms.time = elapsed;
        }
    }

    fn dispose(&mut self, handle: GalaxyHandle) {
        self.meshes.remove(&handle.mesh);
        self.materials.remove(&handle.material);
        self.commands.entity(handle.entity).despawn();
    }
}
