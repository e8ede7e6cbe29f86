use glam::Vec3;

/// Flat particle position storage: `3 * count` floats, x,y,z interleaved.
///
/// Particle `i` occupies slots `[3i, 3i+3)`. The buffer is sized once at
/// construction and never resized; the raw slice is handed to embedders
/// for bulk upload each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSet {
    data: Vec<f32>,
}

impl ParticleSet {
    /// All-zero set of `count` particles.
    pub fn zeroed(count: usize) -> Self {
        Self {
            data: vec![0.0; count * 3],
        }
    }

    /// Build from an existing interleaved buffer. Length must be a
    /// multiple of 3.
    pub fn from_raw(data: Vec<f32>) -> Self {
        assert!(
            data.len() % 3 == 0,
            "interleaved xyz buffer length must be a multiple of 3, got {}",
            data.len()
        );
        Self { data }
    }

    /// Number of particles (not floats).
    pub fn len(&self) -> usize {
        self.data.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn point(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.data[i * 3..i * 3 + 3])
    }

    pub fn set_point(&mut self, i: usize, p: Vec3) {
        p.write_to_slice(&mut self.data[i * 3..i * 3 + 3]);
    }

    /// The raw interleaved buffer, for upload by the presentation layer.
    pub fn positions(&self) -> &[f32] {
        &self.data
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
