use std::sync::Arc;

use glam::{Vec2, Vec3};

use morph_core::config::MorphConfig;
use morph_core::gesture::GestureSignal;
use morph_core::particle::ParticleSet;
use morph_core::shapes::cache::ShapeCache;
use morph_core::shapes::ShapeKind;

#[test]
fn test_particle_set_zeroed() {
    let set = ParticleSet::zeroed(10);
    assert_eq!(set.len(), 10);
    assert_eq!(set.positions().len(), 30);
    for i in 0..10 {
        assert_eq!(set.point(i), Vec3::ZERO, "point[{i}] should be ZERO");
    }
}

#[test]
fn test_particle_set_point_roundtrip() {
    let mut set = ParticleSet::zeroed(3);
    set.set_point(1, Vec3::new(1.0, -2.0, 3.0));
    assert_eq!(set.point(0), Vec3::ZERO);
    assert_eq!(set.point(1), Vec3::new(1.0, -2.0, 3.0));
    assert_eq!(set.point(2), Vec3::ZERO);
    // Interleaved layout: particle 1 occupies slots [3, 6).
    assert_eq!(&set.positions()[3..6], &[1.0, -2.0, 3.0]);
}

#[test]
fn test_particle_set_zero_count() {
    let set = ParticleSet::zeroed(0);
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
}

#[test]
#[should_panic(expected = "multiple of 3")]
fn test_from_raw_rejects_ragged_buffer() {
    let _ = ParticleSet::from_raw(vec![1.0, 2.0]);
}

#[test]
fn test_config_default_values() {
    let config = MorphConfig::default();

    assert_eq!(config.morph_lerp, 0.1);
    assert_eq!(config.tilt_lerp, 0.1);
    assert_eq!(config.scale_base, 0.5);
    assert_eq!(config.scale_range, 2.5);
    assert_eq!(config.breathe_base, 1.5);
    assert_eq!(config.breathe_amplitude, 0.5);
    assert_eq!(config.breathe_rate, 0.8);
    assert_eq!(config.spin_tracking, 0.05);
    assert_eq!(config.spin_idle, 0.1);
    assert_eq!(config.idle_float_rate, 0.2);
    assert_eq!(config.idle_float_amplitude, 0.1);
    assert_eq!(config.jitter_idle, 0.02);
    assert_eq!(config.jitter_openness, 0.1);
}

#[test]
fn test_gesture_default_is_idle_centered() {
    let g = GestureSignal::default();
    assert!(!g.detected);
    assert_eq!(g.openness, 0.0);
    assert_eq!(g.position, Vec2::splat(0.5));
}

#[test]
fn test_gesture_sanitize_clamps_ranges() {
    let g = GestureSignal {
        detected: true,
        openness: 1.7,
        position: Vec2::new(-0.2, 1.4),
    }
    .sanitized();
    assert!(g.detected);
    assert_eq!(g.openness, 1.0);
    assert_eq!(g.position, Vec2::new(0.0, 1.0));
}

#[test]
fn test_gesture_sanitize_degrades_non_finite() {
    let g = GestureSignal {
        detected: true,
        openness: f32::NAN,
        position: Vec2::splat(0.5),
    }
    .sanitized();
    assert_eq!(g, GestureSignal::default());

    let g = GestureSignal {
        detected: true,
        openness: 0.5,
        position: Vec2::new(0.5, f32::NEG_INFINITY),
    }
    .sanitized();
    assert_eq!(g, GestureSignal::default());
}

#[test]
fn test_shape_cache_generates_once_per_shape() {
    let mut cache = ShapeCache::new(128);
    assert_eq!(cache.particle_count(), 128);

    let first = cache.get(ShapeKind::Galaxy);
    let second = cache.get(ShapeKind::Galaxy);
    // Same instance, not a regeneration: the morph lerp depends on the
    // target staying value-stable between shape changes.
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 128);

    let other = cache.get(ShapeKind::Heart);
    assert!(!Arc::ptr_eq(&first, &other));
    assert_eq!(other.len(), 128);
}
