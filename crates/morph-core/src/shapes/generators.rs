//! Procedural point samplers for the six target shapes.
//!
//! Each sampler draws one particle position from its shape's distribution
//! using a caller-supplied uniform source, so a seeded RNG reproduces a
//! full target set exactly. `generate` is the production entry and pulls
//! from process entropy.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::ParticleSet;
use crate::shapes::ShapeKind;

/// Radius of the plain sphere cloud.
pub const SPHERE_RADIUS: f32 = 4.0;
/// Radius of the fireworks burst cloud.
pub const FIREWORKS_RADIUS: f32 = 6.0;
/// Radius of Saturn's planet body.
pub const SATURN_PLANET_RADIUS: f32 = 2.2;
/// Inner and outer radius of Saturn's ring.
pub const SATURN_RING: (f32, f32) = (3.0, 6.0);
/// Fraction of particles assigned to Saturn's planet body.
pub const SATURN_PLANET_FRACTION: f32 = 0.3;

/// Generate the full target set for `shape` from process entropy.
pub fn generate(shape: ShapeKind, count: usize) -> ParticleSet {
    generate_with(shape, count, &mut SmallRng::from_entropy())
}

/// Generate the full target set for `shape` from a caller-supplied RNG.
pub fn generate_with<R: Rng>(shape: ShapeKind, count: usize, rng: &mut R) -> ParticleSet {
    let mut set = ParticleSet::zeroed(count);
    for i in 0..count {
        let p = match shape {
            ShapeKind::Galaxy => galaxy_point(i, rng),
            ShapeKind::Heart => heart_point(rng),
            ShapeKind::Flower => flower_point(rng),
            ShapeKind::Saturn => saturn_point(i, count, rng),
            ShapeKind::Fireworks => ball_point(FIREWORKS_RADIUS, rng),
            ShapeKind::Sphere => ball_point(SPHERE_RADIUS, rng),
        };
        set.set_point(i, p);
    }
    set
}

/// Uniform point inside a solid ball of the given radius.
///
/// Spherical angles from uniform u,v; the radial fraction takes a cube
/// root so density is uniform per unit volume rather than piling up at
/// the center.
pub fn ball_point<R: Rng>(radius: f32, rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    let r = rng.gen::<f32>().cbrt() * radius;
    let sin_phi = phi.sin();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * phi.cos(),
    )
}

/// Three-branch logarithmic spiral galaxy, flattened on Y.
///
/// The particle index selects the branch so the branches stay equally
/// populated. Jitter is cubic-biased (small offsets dominate) with a fair
/// coin for the sign, which keeps the arms tight but fuzzy-edged.
pub fn galaxy_point<R: Rng>(index: usize, rng: &mut R) -> Vec3 {
    let branches = 3;
    let radius = rng.gen::<f32>() * 5.0 + 0.5;
    let spin_angle = radius * 2.5;
    let branch_angle = (index % branches) as f32 * (TAU / branches as f32);

    let jitter_x = cubic_signed(rng) * 0.5;
    let jitter_y = cubic_signed(rng) * 0.5;
    let jitter_z = cubic_signed(rng) * 0.5;

    Vec3::new(
        (branch_angle + spin_angle).cos() * radius + jitter_x,
        jitter_y * 2.0, // flattened disc
        (branch_angle + spin_angle).sin() * radius + jitter_z,
    )
}

/// Parametric heart curve thickened into a volume.
///
/// The classic sextic heart outline, plus an independent 1.5-ball offset
/// for body; the offset's z is doubled before scaling so the silhouette
/// stays flat front-to-back.
pub fn heart_point<R: Rng>(rng: &mut R) -> Vec3 {
    let t = rng.gen::<f32>() * TAU;
    let scale = 0.35;

    let hx = 16.0 * t.sin().powi(3);
    let hy = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();

    let vol = ball_point(1.5, rng);
    Vec3::new(
        (hx + vol.x) * scale,
        (hy + vol.y) * scale,
        vol.z * 2.0 * scale,
    )
}

/// Four-petal rose curve with radial spread.
///
/// `r = cos(4 theta)` goes negative between petals; the sign flip is what
/// folds the curve into lobes, so it is deliberately not clamped.
pub fn flower_point<R: Rng>(rng: &mut R) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    let r = (4.0 * theta).cos();
    let spread = rng.gen::<f32>() * 1.5;
    Vec3::new(
        r * theta.cos() * 4.0 * spread,
        r * theta.sin() * 4.0 * spread,
        (rng.gen::<f32>() - 0.5) * 2.0,
    )
}

/// Saturn: a solid planet body plus a thin flat ring.
///
/// The first `floor(0.3 * count)` indices form the planet, the rest the
/// ring, so the split is stable for a fixed count.
pub fn saturn_point<R: Rng>(index: usize, count: usize, rng: &mut R) -> Vec3 {
    let planet_count = (count as f32 * SATURN_PLANET_FRACTION) as usize;
    if index < planet_count {
        ball_point(SATURN_PLANET_RADIUS, rng)
    } else {
        let (inner, outer) = SATURN_RING;
        let r = inner + rng.gen::<f32>() * (outer - inner);
        let theta = rng.gen::<f32>() * TAU;
        Vec3::new(
            r * theta.cos(),
            (rng.gen::<f32>() - 0.5) * 0.2, // thin ring
            r * theta.sin(),
        )
    }
}

/// Cubic-biased signed unit draw: `u^3` with a fair-coin sign.
fn cubic_signed<R: Rng>(rng: &mut R) -> f32 {
    let magnitude = rng.gen::<f32>().powi(3);
    if rng.gen::<bool>() {
        magnitude
    } else {
        -magnitude
    }
}
