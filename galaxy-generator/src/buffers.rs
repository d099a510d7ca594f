/// Four parallel attribute arrays for one generated galaxy.
///
/// Index `i` refers to the same point in every array: `positions`,
/// `randomness` and `colours` hold three floats per point, `scales` one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloudBuffers {
    pub positions: Vec<f32>,
    pub randomness: Vec<f32>,
    pub colours: Vec<f32>,
    pub scales: Vec<f32>,
}

impl PointCloudBuffers {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count * 3),
            randomness: Vec::with_capacity(count * 3),
            colours: Vec::with_capacity(count * 3),
            scales: Vec::with_capacity(count),
        }
    }

    pub fn point_count(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    pub fn position(&self, i: usize) -> [f32; 3] {
        triple(&self.positions, i)
    }

    pub fn jitter(&self, i: usize) -> [f32; 3] {
        triple(&self.randomness, i)
    }

    pub fn colour(&self, i: usize) -> [f32; 3] {
        triple(&self.colours, i)
    }

    pub fn scale(&self, i: usize) -> f32 {
        self.scales[i]
    }

    /// True when every array length agrees with the point count.
    pub fn is_consistent(&self) -> bool {
        let n = self.point_count();
        self.positions.len() == n * 3
            && self.randomness.len() == n * 3
            && self.colours.len() == n * 3
    }

    pub(crate) fn push(
        &mut self,
        position: [f32; 3],
        jitter: [f32; 3],
        colour: [f32; 3],
        scale: f32,
    ) {
        self.positions.extend_from_slice(&position);
        self.randomness.extend_from_slice(&jitter);
        self.colours.extend_from_slice(&colour);
        self.scales.push(scale);
    }
}

fn triple(values: &[f32], i: usize) -> [f32; 3] {
    let i3 = i * 3;
    [values[i3], values[i3 + 1], values[i3 + 2]]
}
