//! Rayon-backed force accumulation.
//!
//! Distinct pairs can touch the same body, so workers never write into the
//! shared `Body::force` fields directly: they either fold into private
//! per-body buffers that are reduced afterwards, or go through a lock per body.

use glam::DVec2;
use parking_lot::Mutex;
use rayon::prelude::*;

use super::accumulator::AccumulationReport;
use super::forces::PairForce;
use crate::core::{body::Body, pairs::BodyPair, types::PointMass};

/// Smallest slice of pairs handed to a single worker.
const MIN_PAIRS_PER_CHUNK: usize = 256;

fn chunk_len(pair_count: usize) -> usize {
    let workers = rayon::current_num_threads().max(1);
    pair_count.div_ceil(workers).max(MIN_PAIRS_PER_CHUNK)
}

fn snapshot(bodies: &[Body]) -> Vec<PointMass> {
    bodies.iter().map(Body::point_mass).collect()
}

/// Per-worker partial sums, reduced element-wise at the end.
struct Partial {
    forces: Vec<DVec2>,
    report: AccumulationReport,
}

impl Partial {
    fn zeroed(len: usize) -> Self {
        Self {
            forces: vec![DVec2::ZERO; len],
            report: AccumulationReport::default(),
        }
    }

    fn merge(mut self, other: Partial) -> Self {
        for (mine, theirs) in self.forces.iter_mut().zip(other.forces) {
            *mine += theirs;
        }
        self.report.pairs_processed += other.report.pairs_processed;
        self.report.degenerate_pairs += other.report.degenerate_pairs;
        self
    }
}

pub fn accumulate_partitioned<L: PairForce + ?Sized>(
    bodies: &mut [Body],
    pairs: &[BodyPair],
    law: &L,
) -> AccumulationReport {
    let points = snapshot(bodies);
    let len = points.len();

    let total = pairs
        .par_chunks(chunk_len(pairs.len()))
        .fold(
            || Partial::zeroed(len),
            |mut partial, chunk| {
                for pair in chunk {
                    let (i, j) = (pair.first.index(), pair.second.index());
                    let (Some(a), Some(b)) = (points.get(i), points.get(j)) else {
                        continue;
                    };
                    if i == j {
                        continue;
                    }
                    partial.report.pairs_processed += 1;
                    match law.force(a, b) {
                        Some(force) => {
                            partial.forces[i] += force;
                            partial.forces[j] -= force;
                        }
                        None => partial.report.degenerate_pairs += 1,
                    }
                }
                partial
            },
        )
        .reduce(|| Partial::zeroed(len), Partial::merge);

    for (body, force) in bodies.iter_mut().zip(total.forces) {
        body.apply_force(force);
    }
    total.report
}

pub fn accumulate_locked<L: PairForce + ?Sized>(
    bodies: &mut [Body],
    pairs: &[BodyPair],
    law: &L,
) -> AccumulationReport {
    let points = snapshot(bodies);
    let slots: Vec<Mutex<DVec2>> = points.iter().map(|_| Mutex::new(DVec2::ZERO)).collect();

    let report = pairs
        .par_chunks(chunk_len(pairs.len()))
        .map(|chunk| {
            let mut report = AccumulationReport::default();
            for pair in chunk {
                let (i, j) = (pair.first.index(), pair.second.index());
                let (Some(a), Some(b)) = (points.get(i), points.get(j)) else {
                    continue;
                };
                if i == j {
                    continue;
                }
                report.pairs_processed += 1;
                match law.force(a, b) {
                    Some(force) => {
                        *slots[i].lock() += force;
                        *slots[j].lock() -= force;
                    }
                    None => report.degenerate_pairs += 1,
                }
            }
            report
        })
        .reduce(AccumulationReport::default, |a, b| AccumulationReport {
            pairs_processed: a.pairs_processed + b.pairs_processed,
            degenerate_pairs: a.degenerate_pairs + b.degenerate_pairs,
        });

    for (body, slot) in bodies.iter_mut().zip(slots) {
        body.apply_force(slot.into_inner());
    }
    report
}
