pub struct MorphConfig {
    /// Per-tick lerp factor pulling live positions toward the scaled target.
    /// Intentionally not dt-scaled: convergence is per-frame, matching the
    /// original animation feel.
    pub morph_lerp: f32,
    /// Per-tick smoothing factor for the gesture-driven tilt/roll angles.
    pub tilt_lerp: f32,
    /// Scale at openness 0 (closed fist).
    pub scale_base: f32,
    /// Additional scale at openness 1 (open palm).
    pub scale_range: f32,
    /// Center of the idle breathing oscillation.
    pub breathe_base: f32,
    pub breathe_amplitude: f32,
    /// Breathing angular rate in rad/s.
    pub breathe_rate: f32,
    /// Y-axis spin rate while a gesture is tracked, rad/s.
    pub spin_tracking: f32,
    /// Y-axis spin rate while idle, rad/s.
    pub spin_idle: f32,
    /// Idle X-tilt float: `sin(time * rate) * amplitude`.
    pub idle_float_rate: f32,
    pub idle_float_amplitude: f32,
    /// Per-axis jitter magnitude while idle.
    pub jitter_idle: f32,
    /// Jitter magnitude per unit of openness while tracked.
    pub jitter_openness: f32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            morph_lerp: 0.1,
            tilt_lerp: 0.1,
            scale_base: 0.5,
            scale_range: 2.5,
            breathe_base: 1.5,
            breathe_amplitude: 0.5,
            breathe_rate: 0.8,
            spin_tracking: 0.05,
            spin_idle: 0.1,
            idle_float_rate: 0.2,
            idle_float_amplitude: 0.1,
            jitter_idle: 0.02,
            jitter_openness: 0.1,
        }
    }
}
