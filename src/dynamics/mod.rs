//! Simulation dynamics: force laws, force accumulation, and integration.

pub mod accumulator;
pub mod forces;
pub mod integrator;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use accumulator::{accumulate, accumulate_sequential, AccumulationReport, AccumulationStrategy};
pub use forces::{InverseSquareGravity, PairForce};
pub use integrator::{IntegrationScheme, Integrator};
