use std::sync::Arc;

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::MorphConfig;
use crate::gesture::GestureSignal;
use crate::math::lerp;
use crate::particle::ParticleSet;

/// Owns the live position buffer and morphs it toward the current target
/// shape once per rendered frame.
///
/// The live buffer is single-writer: nothing else mutates it, and readers
/// (the upload path) only look after `tick` returns. Targets are immutable
/// once published, so holding them behind `Arc` is safe without locks.
pub struct MorphEngine {
    live: ParticleSet,
    target: Arc<ParticleSet>,
    rotation: Vec3,
    time: f32,
    pub config: MorphConfig,
    rng: SmallRng,
}

impl MorphEngine {
    /// Engine whose live buffer starts equal to `target`, so the first
    /// frame renders the shape at rest instead of exploding from zero.
    pub fn new(target: Arc<ParticleSet>, config: MorphConfig) -> Self {
        Self::with_rng(target, config, SmallRng::from_entropy())
    }

    /// Engine with a caller-supplied jitter RNG, for deterministic tests.
    pub fn with_rng(target: Arc<ParticleSet>, config: MorphConfig, rng: SmallRng) -> Self {
        let live = (*target).clone();
        Self {
            live,
            target,
            rotation: Vec3::ZERO,
            time: 0.0,
            config,
            rng,
        }
    }

    /// Swap in a new target shape. The live buffer is left untouched;
    /// subsequent ticks pull it toward the new target, which is what makes
    /// a shape switch read as a morph rather than a jump cut.
    ///
    /// The target must be sized for the same particle count as the live
    /// buffer. A mismatch is a programming error (both sides are sized
    /// from one constant), checked here once rather than every frame.
    pub fn set_target(&mut self, target: Arc<ParticleSet>) {
        assert_eq!(
            target.len(),
            self.live.len(),
            "target particle count must match the live buffer"
        );
        self.target = target;
    }

    /// Advance one frame: update rotation state and pull every particle
    /// toward the scaled target.
    ///
    /// `dt` is the frame delta in seconds. The morph lerp factor is
    /// applied per tick, not per second; convergence speed therefore
    /// follows the frame rate. That matches the original animation and is
    /// kept as-is.
    pub fn tick(&mut self, gesture: &GestureSignal, dt: f32) {
        let g = gesture.sanitized();
        self.time += dt;

        let scale = self.scale_for(&g);
        let jitter = self.jitter_for(&g);
        let morph = self.config.morph_lerp;

        // Whole-cloud rotation: idle spins faster, a tracked hand steers
        // tilt and roll from its screen position.
        let spin = if g.detected {
            self.config.spin_tracking
        } else {
            self.config.spin_idle
        };
        self.rotation.y += dt * spin;
        if g.detected {
            let tilt = self.config.tilt_lerp;
            self.rotation.x = lerp(self.rotation.x, g.position.y - 0.5, tilt);
            self.rotation.z = lerp(self.rotation.z, -(g.position.x - 0.5), tilt);
        } else {
            self.rotation.x =
                (self.time * self.config.idle_float_rate).sin() * self.config.idle_float_amplitude;
        }

        // Per-particle morph. Jitter is added after the lerp so noise
        // never accumulates: each tick re-anchors toward the scaled
        // target and only the freshest noise remains.
        let live = self.live.positions_mut();
        let target = self.target.positions();
        for (live3, target3) in live.chunks_exact_mut(3).zip(target.chunks_exact(3)) {
            for axis in 0..3 {
                let scaled = target3[axis] * scale;
                live3[axis] =
                    lerp(live3[axis], scaled, morph) + (self.rng.gen::<f32>() - 0.5) * jitter;
            }
        }
    }

    /// Uniform scale applied to the target this frame: openness-driven
    /// while tracked, a slow sine "breathing" while idle.
    fn scale_for(&self, g: &GestureSignal) -> f32 {
        if g.detected {
            self.config.scale_base + g.openness * self.config.scale_range
        } else {
            self.config.breathe_base
                + (self.time * self.config.breathe_rate).sin() * self.config.breathe_amplitude
        }
    }

    /// Per-axis jitter magnitude this frame.
    fn jitter_for(&self, g: &GestureSignal) -> f32 {
        if g.detected {
            g.openness * self.config.jitter_openness
        } else {
            self.config.jitter_idle
        }
    }

    /// The live interleaved position buffer, read after `tick`.
    pub fn positions(&self) -> &[f32] {
        self.live.positions()
    }

    /// The live buffer with typed point access.
    pub fn particles(&self) -> &ParticleSet {
        &self.live
    }

    /// Accumulated rotation angles (x, y, z) in radians for the renderer
    /// to apply as a rigid transform. The y spin grows without bound;
    /// trigonometry downstream wraps it naturally.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Accumulated animation time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.time
    }

    pub fn particle_count(&self) -> usize {
        self.live.len()
    }
}
