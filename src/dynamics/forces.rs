use glam::DVec2;

use crate::config::GRAVITATIONAL_CONSTANT;
use crate::core::types::PointMass;

/// Trait describing a mutual force between the two members of a pair.
pub trait PairForce: Send + Sync {
    /// Force exerted on `a` by `b`; the engine applies its negation to `b`.
    ///
    /// `None` marks a degenerate configuration that contributes no force.
    fn force(&self, a: &PointMass, b: &PointMass) -> Option<DVec2>;
}

/// Inverse-square attraction using a single scalar separation.
///
/// The returned force is the raw separation vector scaled by
/// `G * m_a * m_b / r^2`, so it points from `a` toward `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSquareGravity {
    pub g: f64,
}

impl Default for InverseSquareGravity {
    fn default() -> Self {
        Self::new(GRAVITATIONAL_CONSTANT)
    }
}

impl InverseSquareGravity {
    pub fn new(g: f64) -> Self {
        Self { g }
    }
}

impl PairForce for InverseSquareGravity {
    fn force(&self, a: &PointMass, b: &PointMass) -> Option<DVec2> {
        let delta = b.center - a.center;
        let r = delta.length();
        if r == 0.0 {
            return None;
        }

        let magnitude = self.g * a.mass * b.mass / (r * r);
        let force = delta * magnitude;
        // Separations small enough to overflow are treated like coincident centers.
        force.is_finite().then_some(force)
    }
}
