use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

/// Static scene node. Shadow casting is declared here rather than
/// discovered by walking a loaded model.
#[derive(Debug, Clone)]
pub enum WorldObject {
    Mesh {
        name: &'static str,
        shape: WorldShape,
        colour: Color,
        transform: Transform,
        casts_shadow: bool,
    },
    Group {
        name: &'static str,
        transform: Transform,
        children: Vec<WorldObject>,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum WorldShape {
    Cuboid(Vec3),
    Plane(Vec2),
    Cylinder { radius: f32, height: f32 },
}

impl WorldShape {
    fn mesh(&self) -> Mesh {
        match *self {
            WorldShape::Cuboid(size) => Cuboid::new(size.x, size.y, size.z).into(),
            WorldShape::Plane(size) => Plane3d::default().mesh().size(size.x, size.y).into(),
            WorldShape::Cylinder { radius, height } => Cylinder::new(radius, height).into(),
        }
    }
}

impl WorldObject {
    pub fn casts_shadow(&self) -> bool {
        match self {
            WorldObject::Mesh { casts_shadow, .. } => *casts_shadow,
            WorldObject::Group { children, .. } => children.iter().any(WorldObject::casts_shadow),
        }
    }

    /// Number of mesh nodes in this subtree.
    pub fn mesh_count(&self) -> usize {
        match self {
            WorldObject::Mesh { .. } => 1,
            WorldObject::Group { children, .. } => children.iter().map(WorldObject::mesh_count).sum(),
        }
    }
}

/// Stand-in television: wooden cabinet, dark screen and a two-rod antenna,
/// placed beside the galaxy.
pub fn television() -> WorldObject {
    let wood = Color::srgb(0.36, 0.22, 0.12);
    let metal = Color::srgb(0.6, 0.6, 0.62);

    WorldObject::Group {
        name: "television",
        transform: Transform::from_xyz(-7.0, 0.0, -2.0)
            .with_rotation(Quat::from_rotation_y(0.6)),
        children: vec![
            WorldObject::Mesh {
                name: "cabinet",
                shape: WorldShape::Cuboid(Vec3::new(1.6, 1.2, 1.1)),
                colour: wood,
                transform: Transform::from_xyz(0.0, 0.6, 0.0),
                casts_shadow: true,
            },
            WorldObject::Mesh {
                name: "screen",
                shape: WorldShape::Cuboid(Vec3::new(1.1, 0.8, 0.02)),
                colour: Color::srgb(0.05, 0.07, 0.08),
                transform: Transform::from_xyz(-0.1, 0.65, 0.56),
                casts_shadow: false,
            },
            WorldObject::Mesh {
                name: "antenna_left",
                shape: WorldShape::Cylinder {
                    radius: 0.015,
                    height: 0.9,
                },
                colour: metal,
                transform: Transform::from_xyz(-0.15, 1.55, 0.0)
                    .with_rotation(Quat::from_rotation_z(0.45)),
                casts_shadow: true,
            },
            WorldObject::Mesh {
                name: "antenna_right",
                shape: WorldShape::Cylinder {
                    radius: 0.015,
                    height: 0.9,
                },
                colour: metal,
                transform: Transform::from_xyz(0.15, 1.55, 0.0)
                    .with_rotation(Quat::from_rotation_z(-0.45)),
                casts_shadow: true,
            },
        ],
    }
}

pub fn floor() -> WorldObject {
    WorldObject::Mesh {
        name: "floor",
        shape: WorldShape::Plane(Vec2::splat(40.0)),
        colour: Color::srgb(0.04, 0.04, 0.06),
        transform: Transform::from_xyz(0.0, -0.6, 0.0),
        casts_shadow: false,
    }
}

#[derive(Component)]
pub struct WorldNode {
    pub name: &'static str,
}

/// Spawn a world object tree. Meshes flagged `casts_shadow: false` get
/// `NotShadowCaster` at spawn time.
pub fn spawn_world_object(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    object: &WorldObject,
    parent: Option<Entity>,
) -> Entity {
    let entity = match object {
        WorldObject::Mesh {
            name,
            shape,
            colour,
            transform,
            casts_shadow,
        } => {
            let mut entity = commands.spawn((
                Mesh3d(meshes.add(shape.mesh())),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: *colour,
                    perceptual_roughness: 0.8,
                    ..default()
                })),
                *transform,
                WorldNode { name: *name },
            ));
            if !*casts_shadow {
                entity.insert(NotShadowCaster);
            }
            entity.id()
        }
        WorldObject::Group {
            name,
            transform,
            children,
        } => {
            let group = commands
                .spawn((*transform, Visibility::default(), WorldNode { name: *name }))
                .id();
            for child in children {
                spawn_world_object(commands, meshes, materials, child, Some(group));
            }
            group
        }
    };

    if let Some(parent) = parent {
        commands.entity(parent).add_child(entity);
    }
    entity
}

pub fn spawn_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let objects = [floor(), television()];
    for object in &objects {
        spawn_world_object(&mut commands, &mut meshes, &mut materials, object, None);
    }
    info!(
        "Spawned {} world meshes",
        objects.iter().map(WorldObject::mesh_count).sum::<usize>()
    );
    spawn_lighting(&mut commands);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            illuminance: 4_000.0,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn television_casts_shadow_except_screen() {
        let tv = television();
        assert!(tv.casts_shadow());
        assert_eq!(tv.mesh_count(), 4);

        let WorldObject::Group { children, .. } = &tv else {
            panic!("television should be a group");
        };
        let screen = children
            .iter()
            .find(|c| matches!(c, WorldObject::Mesh { name: "screen", .. }))
            .unwrap();
        assert!(!screen.casts_shadow());
    }

    #[test]
    fn floor_receives_but_does_not_cast() {
        assert!(!floor().casts_shadow());
    }

    #[test]
    fn spawning_flags_non_casters() {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();

        let mut system_state: bevy::ecs::system::SystemState<(
            Commands,
            ResMut<Assets<Mesh>>,
            ResMut<Assets<StandardMaterial>>,
        )> = bevy::ecs::system::SystemState::new(&mut world);
        {
            let (mut commands, mut meshes, mut materials) = system_state.get_mut(&mut world);
            spawn_world_object(&mut commands, &mut meshes, &mut materials, &television(), None);
        }
        system_state.apply(&mut world);

        let mut query = world.query::<(&WorldNode, Option<&NotShadowCaster>)>();
        let nodes: Vec<(&str, bool)> = query
            .iter(&world)
            .map(|(node, not_caster)| (node.name, not_caster.is_some()))
            .collect();

        assert_eq!(nodes.len(), 5);
        assert!(nodes.contains(&("screen", true)));
        assert!(nodes.contains(&("cabinet", false)));
    }
}
