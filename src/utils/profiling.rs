use std::time::{Duration, Instant};

use log::info;

/// Timing and bookkeeping for the most recent step.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepStats {
    pub reset_time: Duration,
    pub accumulate_time: Duration,
    pub integrate_time: Duration,
    pub total_time: Duration,

    pub body_count: usize,
    pub pair_count: usize,
    pub degenerate_pairs: usize,
    pub parallel: bool,
}

impl StepStats {
    pub fn report(&self) {
        let total_us = self.total_time.as_micros() as f32;

        info!(
            "Bodies: {}, Pairs: {}, Degenerate: {}, Parallel: {}",
            self.body_count, self.pair_count, self.degenerate_pairs, self.parallel
        );
        if total_us < 1.0 {
            return;
        }

        info!("Total step: {:.3} ms", self.total_time.as_secs_f32() * 1000.0);
        for (label, phase) in [
            ("Reset", self.reset_time),
            ("Accumulate", self.accumulate_time),
            ("Integrate", self.integrate_time),
        ] {
            info!(
                "  {label:<10} {:.3} ms ({:.1}%)",
                phase.as_secs_f32() * 1000.0,
                (phase.as_micros() as f32 / total_us) * 100.0
            );
        }
    }
}

/// Charges the time until drop to one phase field of [`StepStats`].
pub struct PhaseTimer<'a> {
    phase: &'a mut Duration,
    since: Instant,
}

impl<'a> PhaseTimer<'a> {
    pub fn charge(phase: &'a mut Duration) -> Self {
        Self {
            phase,
            since: Instant::now(),
        }
    }
}

impl Drop for PhaseTimer<'_> {
    fn drop(&mut self) {
        *self.phase += self.since.elapsed();
    }
}
