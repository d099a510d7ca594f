use bevy::pbr::{MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, BlendComponent, BlendFactor, BlendOperation, BlendState,
    RenderPipelineDescriptor, ShaderRef, ShaderType, SpecializedMeshPipelineError,
};
use constants::render_settings::GALAXY_SHADER_PATH;

use super::mesh::{ATTRIBUTE_RANDOMNESS, ATTRIBUTE_SCALE};

/// Overlapping points sum their colour instead of occluding each other.
const ADDITIVE_BLEND: BlendState = BlendState {
    color: BlendComponent {
        src_factor: BlendFactor::SrcAlpha,
        dst_factor: BlendFactor::One,
        operation: BlendOperation::Add,
    },
    alpha: BlendComponent {
        src_factor: BlendFactor::Zero,
        dst_factor: BlendFactor::One,
        operation: BlendOperation::Add,
    },
};

#[derive(ShaderType, Debug, Clone, Copy, Default)]
pub struct GalaxyUniforms {
    /// Seconds since startup, drives the spiral animation.
    pub time: f32,
    /// Point size in pixels, already scaled by the display scale factor.
    pub size: f32,
    pub _webgl2_padding: Vec2,
}

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GalaxyMaterial {
    #[uniform(0)]
    pub uniforms: GalaxyUniforms,
}

impl GalaxyMaterial {
    pub fn new(point_size: f32) -> Self {
        Self {
            uniforms: GalaxyUniforms {
                time: 0.0,
                size: point_size,
                _webgl2_padding: Vec2::ZERO,
            },
        }
    }
}

impl Material for GalaxyMaterial {
    fn vertex_shader() -> ShaderRef {
        GALAXY_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        GALAXY_SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_COLOR.at_shader_location(1),
            ATTRIBUTE_RANDOMNESS.at_shader_location(2),
            ATTRIBUTE_SCALE.at_shader_location(3),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(4),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];

        // Quads are built facing the camera; no culling needed.
        descriptor.primitive.cull_mode = None;

        if let Some(fragment) = descriptor.fragment.as_mut() {
            for target in fragment.targets.iter_mut().flatten() {
                target.blend = Some(ADDITIVE_BLEND);
            }
        }

        if let Some(depth_stencil) = descriptor.depth_stencil.as_mut() {
            depth_stencil.depth_write_enabled = false;
        }

        Ok(())
    }
}
