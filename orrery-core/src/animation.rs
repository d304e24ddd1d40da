/// Animation state for orbital revolution and axial rotation
use crate::bodies::{BODIES, ORBITING_BODIES};

/// Reference orbital period the per-tick speed is normalized against (days)
pub const REFERENCE_PERIOD: f32 = 365.0;
/// Global speed scale applied to every orbital step
pub const PERIOD_SCALE: f32 = 0.01;
/// Shared axial rotation advance per tick, degrees
pub const AXIAL_STEP: f32 = 2.0;

/// Per-body orbital angles plus the shared axial angle, all in degrees and
/// wrapped to [0, 360).
#[derive(Debug, Clone)]
pub struct AnimationState {
    orbit_angles: [f32; ORBITING_BODIES],
    axial_angle: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            orbit_angles: [0.0; ORBITING_BODIES],
            axial_angle: 0.0,
        }
    }

    /// Orbital angle of orbiting body `index` (0 = innermost)
    pub fn orbit_angle(&self, index: usize) -> f32 {
        self.orbit_angles[index]
    }

    pub fn axial_angle(&self) -> f32 {
        self.axial_angle
    }

    /// Advance all angles by one tick.
    ///
    /// Orbital speed is inversely proportional to the body's period; the
    /// step is always well under 360 degrees so a single subtraction wraps.
    pub fn tick(&mut self) {
        for (angle, body) in self.orbit_angles.iter_mut().zip(&BODIES[1..]) {
            let step = REFERENCE_PERIOD / body.orbital_period * PERIOD_SCALE;
            *angle = wrap_degrees(*angle + step);
        }
        self.axial_angle = wrap_degrees(self.axial_angle + AXIAL_STEP);
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-step wrap into [0, 360); callers never advance by a full turn
fn wrap_degrees(angle: f32) -> f32 {
    if angle > 360.0 {
        angle - 360.0
    } else {
        angle
    }
}
