//! Spawning helpers for sandbox hosts.
//!
//! Random scatter spawning and slingshot velocities, the two ways the
//! sandbox creates bodies from user input.

use glam::DVec2;
use rand::Rng;

use crate::{
    config::{DEFAULT_BODY_MASS, DEFAULT_BODY_RADIUS},
    core::types::{BodyId, Color},
    error::Result,
    simulation::Simulation,
};

/// Parameters for [`scatter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterSpec {
    /// Positions are drawn from `[0, extent.x) x [0, extent.y)`.
    pub extent: DVec2,
    pub radius: f64,
    pub mass: f64,
}

impl Default for ScatterSpec {
    fn default() -> Self {
        Self {
            extent: DVec2::splat(1000.0),
            radius: DEFAULT_BODY_RADIUS,
            mass: DEFAULT_BODY_MASS,
        }
    }
}

/// Adds `count` resting bodies at uniformly random positions.
///
/// Stops at the first rejected body; bodies added before it stay in place.
pub fn scatter<R: Rng + ?Sized>(
    sim: &mut Simulation,
    spec: &ScatterSpec,
    count: usize,
    rng: &mut R,
) -> Result<Vec<BodyId>> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let position = DVec2::new(
            sample_axis(rng, spec.extent.x),
            sample_axis(rng, spec.extent.y),
        );
        let id = sim.add_body(
            position,
            spec.radius,
            spec.mass,
            DVec2::ZERO,
            random_color(rng),
        )?;
        ids.push(id);
    }
    Ok(ids)
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// Opaque color with a blue bias.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::rgb(
        rng.random_range(0..255),
        rng.random_range(0..255),
        rng.random_range(126..252),
    )
}

/// Initial velocity of a body spawned at `press` when the pointer is pulled
/// back to `release`: it flies away from the release point.
pub fn sling_velocity(press: DVec2, release: DVec2, scale: f64) -> DVec2 {
    (press - release) * scale
}
