//! Orbital – an incremental pairwise N-body gravity engine.
//!
//! A host (renderer, input layer) adds bodies with [`Simulation::add_body`],
//! calls [`Simulation::step`] once per frame, and draws from
//! [`Simulation::bodies`]. Pairs between bodies are built incrementally as
//! bodies arrive, so a step never rediscovers them.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod scenario;
pub mod simulation;
pub mod utils;

pub use glam::DVec2;

pub use config::SimulationConfig;
pub use core::{
    body::Body,
    pairs::{BodyPair, PairSet},
    types::{BodyId, Color, PointMass},
};
pub use dynamics::{
    accumulator::{AccumulationReport, AccumulationStrategy},
    forces::{InverseSquareGravity, PairForce},
    integrator::{IntegrationScheme, Integrator},
};
pub use error::{Result, SimulationError};
pub use scenario::{random_color, scatter, sling_velocity, ScatterSpec};
pub use simulation::Simulation;
pub use utils::StepStats;
