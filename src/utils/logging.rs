use log::{log_enabled, warn, Level};
use std::time::{Duration, Instant};

/// Emits a trace line when a step phase finishes, tagged with the step number.
pub struct PhaseTrace {
    phase: &'static str,
    step: u64,
    entered: Option<Instant>,
}

impl PhaseTrace {
    pub fn enter(phase: &'static str, step: u64) -> Self {
        let entered = log_enabled!(Level::Trace).then(Instant::now);
        Self {
            phase,
            step,
            entered,
        }
    }
}

impl Drop for PhaseTrace {
    fn drop(&mut self) {
        if let Some(entered) = self.entered {
            log::trace!(
                "step {} phase {} finished in {} µs",
                self.step,
                self.phase,
                entered.elapsed().as_micros()
            );
        }
    }
}

/// Warns when a step ran past its budget. Returns whether it did.
pub fn warn_if_step_budget_exceeded(duration: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = duration.as_secs_f32() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!("Step exceeded budget: {elapsed_ms:.2} ms > {budget_ms:.2} ms");
        true
    } else {
        false
    }
}
