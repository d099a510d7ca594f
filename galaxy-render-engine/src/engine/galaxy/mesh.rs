use bevy::prelude::*;
use bevy::render::mesh::{MeshVertexAttribute, PrimitiveTopology, VertexAttributeValues};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::VertexFormat;
use constants::render_settings::VERTICES_PER_POINT;
use galaxy_generator::PointCloudBuffers;

/// Per-point jitter, added in the vertex stage after the spin.
pub const ATTRIBUTE_RANDOMNESS: MeshVertexAttribute =
    MeshVertexAttribute::new("Vertex_Randomness", 988_540_917, VertexFormat::Float32x3);

/// Per-point size multiplier.
pub const ATTRIBUTE_SCALE: MeshVertexAttribute =
    MeshVertexAttribute::new("Vertex_Scale", 988_540_918, VertexFormat::Float32);

/// Corner offsets of the two triangles forming each point's quad (CCW).
const QUAD_CORNERS: [[f32; 2]; VERTICES_PER_POINT] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [1.0, 1.0],
    [-1.0, -1.0],
    [1.0, 1.0],
    [-1.0, 1.0],
];

/// Build the galaxy mesh. Every point is emitted six times, once per quad
/// corner, with identical attributes; the vertex stage expands the quad in
/// screen space using the corner stored in UV_0.
pub fn create_galaxy_mesh(buffers: &PointCloudBuffers) -> Mesh {
    let vertex_count = buffers.point_count() * VERTICES_PER_POINT;

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut colours: Vec<[f32; 4]> = Vec::with_capacity(vertex_count);
    let mut randomness: Vec<[f32; 3]> = Vec::with_capacity(vertex_count);
    let mut scales: Vec<f32> = Vec::with_capacity(vertex_count);
    let mut corners: Vec<[f32; 2]> = Vec::with_capacity(vertex_count);

    for i in 0..buffers.point_count() {
        let position = buffers.position(i);
        let jitter = buffers.jitter(i);
        let [r, g, b] = buffers.colour(i);
        let scale = buffers.scale(i);

        for corner in QUAD_CORNERS {
            positions.push(position);
            colours.push([r, g, b, 1.0]);
            randomness.push(jitter);
            scales.push(scale);
            corners.push(corner);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);
    mesh.insert_attribute(ATTRIBUTE_RANDOMNESS, randomness);
    mesh.insert_attribute(
        ATTRIBUTE_SCALE,
        VertexAttributeValues::Float32(scales),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, corners);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_generator::{GenerationParameters, generate_with_rng};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_buffers(count: u32) -> PointCloudBuffers {
        let params = GenerationParameters {
            count,
            ..GenerationParameters::default()
        };
        generate_with_rng(&params, &mut StdRng::seed_from_u64(9)).unwrap()
    }

    #[test]
    fn emits_six_vertices_per_point() {
        let mesh = create_galaxy_mesh(&sample_buffers(25));
        assert_eq!(mesh.count_vertices(), 25 * VERTICES_PER_POINT);
        assert!(mesh.attribute(ATTRIBUTE_RANDOMNESS).is_some());
        assert!(mesh.attribute(ATTRIBUTE_SCALE).is_some());
        assert!(mesh.attribute(Mesh::ATTRIBUTE_COLOR).is_some());
        assert!(mesh.attribute(Mesh::ATTRIBUTE_UV_0).is_some());
    }

    #[test]
    fn quad_vertices_share_point_attributes() {
        let buffers = sample_buffers(3);
        let mesh = create_galaxy_mesh(&buffers);

        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("positions missing");
        };
        let Some(VertexAttributeValues::Float32(scales)) = mesh.attribute(ATTRIBUTE_SCALE) else {
            panic!("scales missing");
        };

        for point in 0..3 {
            for corner in 0..VERTICES_PER_POINT {
                let vertex = point * VERTICES_PER_POINT + corner;
                assert_eq!(positions[vertex], buffers.position(point));
                assert_eq!(scales[vertex], buffers.scale(point));
            }
        }
    }

    #[test]
    fn empty_buffers_give_empty_mesh() {
        let mesh = create_galaxy_mesh(&PointCloudBuffers::default());
        assert_eq!(mesh.count_vertices(), 0);
    }
}
