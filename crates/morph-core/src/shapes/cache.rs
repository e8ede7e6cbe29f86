use std::collections::HashMap;
use std::sync::Arc;

use crate::particle::ParticleSet;
use crate::shapes::{generators, ShapeKind};

/// Per-shape memo of generated target sets.
///
/// Regenerating a target re-rolls every random draw, which would turn the
/// morph lerp into a chase after fresh noise every frame — target sets
/// must stay value-stable between shape changes. The cache publishes each
/// set behind an `Arc` so the engine can hold the current target while
/// the cache retains every shape already seen.
pub struct ShapeCache {
    count: usize,
    entries: HashMap<ShapeKind, Arc<ParticleSet>>,
}

impl ShapeCache {
    /// Cache for target sets of `count` particles.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            entries: HashMap::new(),
        }
    }

    /// Fetch the target set for `shape`, generating it on first request.
    pub fn get(&mut self, shape: ShapeKind) -> Arc<ParticleSet> {
        let count = self.count;
        Arc::clone(
            self.entries
                .entry(shape)
                .or_insert_with(|| Arc::new(generators::generate(shape, count))),
        )
    }

    /// Particle count all cached sets are sized for.
    pub fn particle_count(&self) -> usize {
        self.count
    }
}
