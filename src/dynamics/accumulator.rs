use serde::{Deserialize, Serialize};

use super::forces::PairForce;
use crate::core::{
    body::Body,
    pairs::{get2_mut, BodyPair},
};

/// How the pairwise force phase of a step is distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccumulationStrategy {
    /// One thread, pairs in insertion order.
    #[default]
    Sequential,
    /// Disjoint pair chunks fold into private per-body buffers that are summed afterwards.
    PartitionedReduce,
    /// Workers share per-body accumulators, each behind its own lock.
    PerBodyLock,
}

impl AccumulationStrategy {
    pub fn is_parallel(self) -> bool {
        !matches!(self, Self::Sequential)
    }
}

/// Outcome of one force accumulation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AccumulationReport {
    pub pairs_processed: usize,
    pub degenerate_pairs: usize,
}

/// Applies `law` to every pair, adding `+f` to the first body and `-f` to the second.
///
/// Accumulators are not reset here; callers zero them before the pass.
/// Parallel strategies fall back to the sequential pass when the `parallel`
/// feature is disabled.
pub fn accumulate<L: PairForce>(
    strategy: AccumulationStrategy,
    bodies: &mut [Body],
    pairs: &[BodyPair],
    law: &L,
) -> AccumulationReport {
    match strategy {
        AccumulationStrategy::Sequential => accumulate_sequential(bodies, pairs, law),
        #[cfg(feature = "parallel")]
        AccumulationStrategy::PartitionedReduce => {
            super::parallel::accumulate_partitioned(bodies, pairs, law)
        }
        #[cfg(feature = "parallel")]
        AccumulationStrategy::PerBodyLock => super::parallel::accumulate_locked(bodies, pairs, law),
        #[cfg(not(feature = "parallel"))]
        AccumulationStrategy::PartitionedReduce | AccumulationStrategy::PerBodyLock => {
            accumulate_sequential(bodies, pairs, law)
        }
    }
}

pub fn accumulate_sequential<L: PairForce + ?Sized>(
    bodies: &mut [Body],
    pairs: &[BodyPair],
    law: &L,
) -> AccumulationReport {
    let mut report = AccumulationReport::default();

    for pair in pairs {
        let Some((a, b)) = get2_mut(bodies, pair.first.index(), pair.second.index()) else {
            log::warn!("skipping pair {pair:?} that does not resolve to two bodies");
            continue;
        };
        report.pairs_processed += 1;

        match law.force(&a.point_mass(), &b.point_mass()) {
            Some(force) => {
                a.apply_force(force);
                b.apply_force(-force);
            }
            None => {
                log::trace!("zero separation between bodies {} and {}", a.id, b.id);
                report.degenerate_pairs += 1;
            }
        }
    }

    report
}
