use orbital::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn main() -> Result<()> {
    env_logger::init();

    let mut sim = Simulation::new(SimulationConfig {
        max_bodies: Some(config::DEFAULT_MAX_BODIES),
        step_budget_ms: Some(16.0),
        ..Default::default()
    })?;

    let mut rng = Pcg32::seed_from_u64(2024);
    scatter(&mut sim, &ScatterSpec::default(), 100, &mut rng)?;

    // A click at (500, 500) dragged back to (480, 520) slings a heavier body.
    let press = DVec2::new(500.0, 500.0);
    let velocity = sling_velocity(press, DVec2::new(480.0, 520.0), config::DEFAULT_SLING_SCALE);
    let slung = sim.add_body(press, config::DEFAULT_BODY_RADIUS, 1.0, velocity, random_color(&mut rng))?;

    for _ in 0..600 {
        sim.step();
    }

    sim.last_step_stats().report();
    if let Some(body) = sim.body(slung) {
        println!("Slung body after {} steps: {body}", sim.steps());
    }
    println!("Bodies: {}", sim.len());
    Ok(())
}
