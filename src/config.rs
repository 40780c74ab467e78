//! Global configuration constants and the per-simulation configuration.

use serde::{Deserialize, Serialize};

use crate::dynamics::{accumulator::AccumulationStrategy, integrator::IntegrationScheme};
use crate::error::{Result, SimulationError};

/// Multiplier in the pairwise force law. Tunable, not physically calibrated.
pub const GRAVITATIONAL_CONSTANT: f64 = 1.0;

/// Radius given to bodies spawned by clicks or random scatter.
pub const DEFAULT_BODY_RADIUS: f64 = 5.0;

/// Mass given to bodies spawned by clicks or random scatter.
pub const DEFAULT_BODY_MASS: f64 = 0.1;

/// Factor converting a pointer drag distance into an initial velocity.
pub const DEFAULT_SLING_SCALE: f64 = 0.05;

/// Body cap a sandbox host would typically configure.
pub const DEFAULT_MAX_BODIES: usize = 256;

/// Pair count below which parallel accumulation is not worth the fan-out.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Settings fixed for the lifetime of a [`crate::Simulation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravitational_constant: f64,
    pub integration: IntegrationScheme,
    pub accumulation: AccumulationStrategy,
    /// Minimum pair count before a parallel strategy is used.
    pub parallel_threshold: usize,
    /// `None` leaves the body count unbounded.
    pub max_bodies: Option<usize>,
    /// Logs a warning whenever a step takes longer than this.
    pub step_budget_ms: Option<f32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            integration: IntegrationScheme::default(),
            accumulation: AccumulationStrategy::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_bodies: None,
            step_budget_ms: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        let g = self.gravitational_constant;
        if !g.is_finite() || g <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "gravitational_constant must be finite and positive, got {g}"
            )));
        }
        if self.parallel_threshold == 0 {
            return Err(SimulationError::InvalidConfig(
                "parallel_threshold must be at least 1".into(),
            ));
        }
        if self.max_bodies == Some(0) {
            return Err(SimulationError::InvalidConfig(
                "max_bodies must allow at least one body".into(),
            ));
        }
        if let Some(budget) = self.step_budget_ms {
            if !budget.is_finite() || budget <= 0.0 {
                return Err(SimulationError::InvalidConfig(format!(
                    "step_budget_ms must be finite and positive, got {budget}"
                )));
            }
        }
        Ok(())
    }
}
