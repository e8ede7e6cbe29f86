use glam::Vec2;

/// Latest hand-tracking snapshot, polled once per frame.
///
/// Produced by an external tracker at its own cadence; the engine only
/// ever reads the most recent value. `openness` is 0 for a closed fist,
/// 1 for an open palm. `position` is the normalized palm position in
/// `[0,1]^2` (screen space, origin top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSignal {
    pub detected: bool,
    pub openness: f32,
    pub position: Vec2,
}

impl GestureSignal {
    /// Clamp the signal into its documented ranges.
    ///
    /// Trackers occasionally report values slightly outside `[0,1]`, and a
    /// misbehaving one could report NaN; neither may reach the position
    /// buffer. Non-finite input degrades to the not-detected default.
    pub fn sanitized(&self) -> Self {
        if !self.openness.is_finite()
            || !self.position.x.is_finite()
            || !self.position.y.is_finite()
        {
            return Self::default();
        }
        Self {
            detected: self.detected,
            openness: self.openness.clamp(0.0, 1.0),
            position: self.position.clamp(Vec2::ZERO, Vec2::ONE),
        }
    }
}

impl Default for GestureSignal {
    /// No hand: idle mode, centered position.
    fn default() -> Self {
        Self {
            detected: false,
            openness: 0.0,
            position: Vec2::splat(0.5),
        }
    }
}
