use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::types::{BodyId, Color, PointMass};
use crate::dynamics::integrator::IntegrationScheme;
use crate::error::{ensure_finite, Result, SimulationError};

/// A simulated point-mass.
///
/// `position` is the top-left reference corner the host draws from; all
/// physics uses [`Body::center`], which sits `radius` further along both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub force: DVec2,
    pub radius: f64,
    pub mass: f64,
    pub color: Color,
}

impl Body {
    /// Validates the initial state and builds a body with a zeroed force accumulator.
    pub fn new(
        id: BodyId,
        position: DVec2,
        radius: f64,
        mass: f64,
        velocity: DVec2,
        color: Color,
    ) -> Result<Self> {
        ensure_finite("position.x", position.x)?;
        ensure_finite("position.y", position.y)?;
        ensure_finite("velocity.x", velocity.x)?;
        ensure_finite("velocity.y", velocity.y)?;
        ensure_finite("radius", radius)?;
        ensure_finite("mass", mass)?;
        if radius <= 0.0 {
            return Err(SimulationError::NonPositiveRadius(radius));
        }
        if mass <= 0.0 {
            return Err(SimulationError::NonPositiveMass(mass));
        }

        Ok(Self {
            id,
            position,
            velocity,
            force: DVec2::ZERO,
            radius,
            mass,
            color,
        })
    }

    pub fn center(&self) -> DVec2 {
        self.position + DVec2::splat(self.radius)
    }

    pub fn point_mass(&self) -> PointMass {
        PointMass::new(self.center(), self.mass)
    }

    pub fn reset_force(&mut self) {
        self.force = DVec2::ZERO;
    }

    pub fn apply_force(&mut self, force: DVec2) {
        self.force += force;
    }

    /// Advances one step with semi-implicit Euler.
    pub fn integrate(&mut self) {
        self.integrate_with(IntegrationScheme::SemiImplicitEuler);
    }

    pub fn integrate_with(&mut self, scheme: IntegrationScheme) {
        match scheme {
            IntegrationScheme::SemiImplicitEuler => {
                self.velocity += self.force;
                self.position += self.velocity;
            }
            IntegrationScheme::ForceToPosition => {
                self.position += self.force;
            }
        }
    }
}

/// Debug overlay line; reports the physics center, not the sprite corner.
impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let center = self.center();
        write!(
            f,
            "{} - x: {:.1}, y: {:.1} Fx: {:.6}, Fy: {:.6}",
            self.id, center.x, center.y, self.force.x, self.force.y
        )
    }
}
