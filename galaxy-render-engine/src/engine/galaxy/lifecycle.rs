use bevy::prelude::*;
use galaxy_generator::{GenerationError, GenerationParameters, generate, generate_with_rng};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::backend::{GalaxyHandle, PointCloudBackend};
use super::renderer::ShadedPointRenderer;

/// Outcome of a successful regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub point_count: usize,
    pub generation: u64,
}

/// Generation parameters plus the single renderable built from them.
pub struct GalaxyLifecycle<H> {
    pub parameters: GenerationParameters,
    pub seed: Option<u64>,
    renderer: ShadedPointRenderer<H>,
    generation: u64,
}

impl<H> GalaxyLifecycle<H> {
    pub fn new(parameters: GenerationParameters, seed: Option<u64>) -> Self {
        Self {
            parameters,
            seed,
            renderer: ShadedPointRenderer::default(),
            generation: 0,
        }
    }

    /// Replace the current renderable with one generated from the current
    /// parameters. Invalid parameters are rejected before anything is
    /// released, so the previous galaxy stays on screen.
    pub fn regenerate<B>(&mut self, backend: &mut B) -> Result<GenerationReport, GenerationError>
    where
        B: PointCloudBackend<Handle = H>,
    {
        self.parameters.validate()?;

        self.renderer.dispose(backend);

        let buffers = match self.seed {
            Some(seed) => {
                generate_with_rng(&self.parameters, &mut StdRng::seed_from_u64(seed))?
            }
            None => generate(&self.parameters)?,
        };

        self.renderer.build(backend, &buffers);
        self.generation += 1;

        Ok(GenerationReport {
            point_count: buffers.point_count(),
            generation: self.generation,
        })
    }

    pub fn update<B>(&self, backend: &mut B, elapsed: f32)
    where
        B: PointCloudBackend<Handle = H>,
    {
        self.renderer.update(backend, elapsed);
    }

    pub fn dispose<B>(&mut self, backend: &mut B)
    where
        B: PointCloudBackend<Handle = H>,
    {
        self.renderer.dispose(backend);
    }

    pub fn is_built(&self) -> bool {
        self.renderer.is_built()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The scene's galaxy. Exclusively owns the live renderable.
#[derive(Resource, Deref, DerefMut)]
pub struct Galaxy(pub GalaxyLifecycle<GalaxyHandle>);
