use galaxy_generator::PointCloudBuffers;

use super::backend::PointCloudBackend;

/// Owns at most one renderable built from point-cloud buffers.
pub struct ShadedPointRenderer<H> {
    handle: Option<H>,
}

impl<H> Default for ShadedPointRenderer<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> ShadedPointRenderer<H> {
    /// Build a renderable from `buffers`, releasing any previous one first.
    pub fn build<B>(&mut self, backend: &mut B, buffers: &PointCloudBuffers)
    where
        B: PointCloudBackend<Handle = H>,
    {
        self.dispose(backend);
        self.handle = Some(backend.build(buffers));
    }

    pub fn update<B>(&self, backend: &mut B, elapsed: f32)
    where
        B: PointCloudBackend<Handle = H>,
    {
        if let Some(handle) = &self.handle {
            backend.set_time(handle, elapsed);
        }
    }

    /// Release the renderable. No-op when nothing has been built.
    pub fn dispose<B>(&mut self, backend: &mut B)
    where
        B: PointCloudBackend<Handle = H>,
    {
        if let Some(handle) = self.handle.take() {
            backend.dispose(handle);
        }
    }

    pub fn is_built(&self) -> bool {
        self.handle.is_some()
    }
}
