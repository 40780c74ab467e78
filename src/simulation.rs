use std::time::Instant;

use glam::DVec2;
use log::debug;

use crate::{
    config::SimulationConfig,
    core::{
        body::Body,
        pairs::{BodyPair, PairSet},
        types::{BodyId, Color},
    },
    dynamics::{
        accumulator::{accumulate, AccumulationStrategy},
        forces::InverseSquareGravity,
        integrator::Integrator,
    },
    error::{Result, SimulationError},
    utils::{
        logging::{warn_if_step_budget_exceeded, PhaseTrace},
        profiling::{PhaseTimer, StepStats},
    },
};

/// Incremental pairwise N-body engine.
///
/// Owns every body and the set of unique pairs between them. Each call to
/// [`Simulation::step`] resets all forces, accumulates gravity over every
/// pair, and only then integrates the bodies.
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    pairs: PairSet,
    gravity: InverseSquareGravity,
    integrator: Integrator,
    config: SimulationConfig,
    steps: u64,
    last_stats: StepStats,
}

impl Default for Simulation {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self::from_valid_config(config)
    }
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        debug!("creating simulation with {config:?}");
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SimulationConfig) -> Self {
        Self {
            bodies: Vec::new(),
            pairs: PairSet::new(),
            gravity: InverseSquareGravity::new(config.gravitational_constant),
            integrator: Integrator::new(config.integration),
            config,
            steps: 0,
            last_stats: StepStats::default(),
        }
    }

    /// Adds a body and pairs it with every body already present.
    ///
    /// Invalid parameters or a full simulation leave bodies and pairs untouched.
    pub fn add_body(
        &mut self,
        position: DVec2,
        radius: f64,
        mass: f64,
        velocity: DVec2,
        color: Color,
    ) -> Result<BodyId> {
        if let Some(max) = self.config.max_bodies {
            if self.bodies.len() >= max {
                return Err(SimulationError::CapacityExceeded { max });
            }
        }

        let id = BodyId::from_index(self.bodies.len());
        let body = Body::new(id, position, radius, mass, velocity, color)?;
        debug!(
            "adding body {id} at ({:.1}, {:.1}) with mass {mass}",
            position.x, position.y
        );

        self.bodies.push(body);
        self.pairs.register(id);
        Ok(id)
    }

    /// Advances the whole system by one discrete step.
    pub fn step(&mut self) {
        let started = Instant::now();
        let strategy = self.strategy_for_step();
        self.integrator.set_parallel(strategy.is_parallel());

        let mut stats = StepStats {
            body_count: self.bodies.len(),
            pair_count: self.pairs.len(),
            parallel: self.integrator.parallel(),
            ..StepStats::default()
        };

        {
            let _timer = PhaseTimer::charge(&mut stats.reset_time);
            for body in &mut self.bodies {
                body.reset_force();
            }
        }

        let report = {
            let _trace = PhaseTrace::enter("accumulate", self.steps);
            let _timer = PhaseTimer::charge(&mut stats.accumulate_time);
            accumulate(
                strategy,
                &mut self.bodies,
                self.pairs.as_slice(),
                &self.gravity,
            )
        };
        stats.degenerate_pairs = report.degenerate_pairs;

        {
            let _trace = PhaseTrace::enter("integrate", self.steps);
            let _timer = PhaseTimer::charge(&mut stats.integrate_time);
            self.integrator.step(&mut self.bodies);
        }

        stats.total_time = started.elapsed();
        if let Some(budget) = self.config.step_budget_ms {
            warn_if_step_budget_exceeded(stats.total_time, budget);
        }

        self.steps += 1;
        self.last_stats = stats;
    }

    fn strategy_for_step(&self) -> AccumulationStrategy {
        let requested = self.config.accumulation;
        if requested.is_parallel()
            && cfg!(feature = "parallel")
            && self.pairs.len() >= self.config.parallel_threshold
        {
            requested
        } else {
            AccumulationStrategy::Sequential
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn pairs(&self) -> &[BodyPair] {
        self.pairs.as_slice()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of completed steps.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn last_step_stats(&self) -> &StepStats {
        &self.last_stats
    }

    /// Sum of all force accumulators; zero up to rounding after any step.
    pub fn net_force(&self) -> DVec2 {
        self.bodies.iter().map(|body| body.force).sum()
    }

    /// One human-readable line per body, for a host debug overlay.
    pub fn debug_lines(&self) -> Vec<String> {
        self.bodies.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn add_at_center(sim: &mut Simulation, center: DVec2, mass: f64) -> BodyId {
        let radius = 1.0;
        sim.add_body(
            center - DVec2::splat(radius),
            radius,
            mass,
            DVec2::ZERO,
            Color::WHITE,
        )
        .expect("valid body")
    }

    #[test]
    fn add_body_registers_pairs_with_existing_bodies() {
        let mut sim = Simulation::default();
        for i in 0..4 {
            add_at_center(&mut sim, DVec2::new(i as f64 * 10.0, 0.0), 1.0);
        }

        assert_eq!(sim.len(), 4);
        assert_eq!(sim.pair_count(), 6);
        let newest: Vec<_> = sim.pairs()[3..]
            .iter()
            .map(|p| (p.first.index(), p.second.index()))
            .collect();
        assert_eq!(newest, vec![(0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn rejected_body_leaves_state_unchanged() {
        let mut sim = Simulation::default();
        add_at_center(&mut sim, DVec2::ZERO, 1.0);

        let err = sim
            .add_body(DVec2::ZERO, 1.0, -3.0, DVec2::ZERO, Color::WHITE)
            .unwrap_err();
        assert_eq!(err, SimulationError::NonPositiveMass(-3.0));
        let err = sim
            .add_body(DVec2::new(f64::INFINITY, 0.0), 1.0, 1.0, DVec2::ZERO, Color::WHITE)
            .unwrap_err();
        assert!(matches!(err, SimulationError::NonFinite { .. }));

        assert_eq!(sim.len(), 1);
        assert_eq!(sim.pair_count(), 0);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut sim = Simulation::new(SimulationConfig {
            max_bodies: Some(2),
            ..Default::default()
        })
        .expect("valid config");
        add_at_center(&mut sim, DVec2::ZERO, 1.0);
        add_at_center(&mut sim, DVec2::ONE, 1.0);

        let err = sim
            .add_body(DVec2::ZERO, 1.0, 1.0, DVec2::ZERO, Color::WHITE)
            .unwrap_err();
        assert_eq!(err, SimulationError::CapacityExceeded { max: 2 });
        assert_eq!(sim.pair_count(), 1);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let result = Simulation::new(SimulationConfig {
            gravitational_constant: -1.0,
            ..Default::default()
        });
        assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn step_accumulates_before_integrating() {
        let mut sim = Simulation::default();
        let a = add_at_center(&mut sim, DVec2::ZERO, 1.0);
        let b = add_at_center(&mut sim, DVec2::new(3.0, 4.0), 1.0);

        sim.step();

        let body_a = sim.body(a).expect("a");
        let body_b = sim.body(b).expect("b");
        assert_relative_eq!(body_a.force.x, 0.12, epsilon = 1e-12);
        assert_relative_eq!(body_a.force.y, 0.16, epsilon = 1e-12);
        assert_relative_eq!(body_b.force.x, -0.12, epsilon = 1e-12);
        assert_relative_eq!(body_b.force.y, -0.16, epsilon = 1e-12);
        assert_relative_eq!(body_a.center().x, 0.12, epsilon = 1e-12);
        assert_relative_eq!(body_b.center().y, 4.0 - 0.16, epsilon = 1e-12);
        assert_eq!(sim.steps(), 1);
    }

    #[test]
    fn stats_describe_the_last_step() {
        let mut sim = Simulation::default();
        add_at_center(&mut sim, DVec2::ZERO, 1.0);
        add_at_center(&mut sim, DVec2::ZERO, 1.0);
        add_at_center(&mut sim, DVec2::new(5.0, 0.0), 1.0);

        sim.step();

        let stats = sim.last_step_stats();
        assert_eq!(stats.body_count, 3);
        assert_eq!(stats.pair_count, 3);
        assert_eq!(stats.degenerate_pairs, 1);
        assert!(!stats.parallel);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn stats_report_parallel_steps() {
        let mut sim = Simulation::new(SimulationConfig {
            accumulation: AccumulationStrategy::PerBodyLock,
            parallel_threshold: 1,
            ..Default::default()
        })
        .expect("valid config");
        for i in 0..3 {
            add_at_center(&mut sim, DVec2::new(i as f64 * 4.0, 0.0), 1.0);
        }

        sim.step();

        assert!(sim.last_step_stats().parallel);
        assert_eq!(sim.last_step_stats().pair_count, 3);
    }

    #[test]
    fn small_systems_stay_sequential() {
        let mut sim = Simulation::new(SimulationConfig {
            accumulation: AccumulationStrategy::PartitionedReduce,
            parallel_threshold: 100,
            ..Default::default()
        })
        .expect("valid config");
        for i in 0..5 {
            add_at_center(&mut sim, DVec2::new(i as f64, 0.0), 1.0);
        }

        assert_eq!(sim.strategy_for_step(), AccumulationStrategy::Sequential);
    }

    #[test]
    fn debug_lines_report_centers_in_insertion_order() {
        let mut sim = Simulation::default();
        add_at_center(&mut sim, DVec2::new(1.0, 1.0), 1.0);
        add_at_center(&mut sim, DVec2::new(11.0, 21.0), 1.0);

        let lines = sim.debug_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0 - x: 1.0, y: 1.0"));
        assert!(lines[1].starts_with("1 - x: 11.0, y: 21.0"));
    }
}
