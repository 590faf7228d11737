// src/rank/iterate.rs
//! Deterministic estimator: Jacobi fixed-point iteration to convergence.

use super::transition::validate_damping;
use super::normalize;
use crate::corpus::Corpus;
use crate::error::{RankError, Result};

pub const DEFAULT_THRESHOLD: f64 = 0.0005;

/// Hard bound on sweeps. Convergence is a contraction for damping < 1,
/// but damping = 1 on a graph with sinks can drain all mass instead of
/// settling; the bound keeps that case terminating.
const MAX_SWEEPS: usize = 1000;

/// Computes PageRank as the fixed point of the update rule, stopping
/// once the L1 norm of a sweep's delta drops below
/// [`DEFAULT_THRESHOLD`].
///
/// # Errors
/// Rejects `damping` outside [0, 1]; fails with `DegenerateMass` if the
/// rank mass drains to zero (possible only at damping = 1 with sinks).
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Result<Vec<f64>> {
    iterate_pagerank_with(corpus, damping, DEFAULT_THRESHOLD)
}

/// Same as [`iterate_pagerank`] with an explicit convergence threshold.
///
/// Every page starts at `1/N`. Each sweep recomputes every page's rank
/// from the previous vector only:
///
/// `new[p] = (1 - d)/N + d * sum over q linking to p of rank[q] / out_degree(q)`
///
/// Sink pages contribute to no sum term; their mass re-enters only
/// through the `(1 - d)/N` share. The returned vector is normalized once
/// at the end so it sums to 1 even when sink leakage shrank the raw
/// fixed point.
///
/// # Errors
/// Rejects `damping` outside [0, 1] and a non-positive or non-finite
/// `threshold`; fails with `DegenerateMass` if the rank mass drains to
/// zero.
#[allow(clippy::cast_precision_loss)]
pub fn iterate_pagerank_with(corpus: &Corpus, damping: f64, threshold: f64) -> Result<Vec<f64>> {
    validate_damping(damping)?;
    validate_threshold(threshold)?;

    let mut ranks = vec![1.0 / corpus.len() as f64; corpus.len()];
    let mut next = vec![0.0; corpus.len()];

    for _ in 0..MAX_SWEEPS {
        sweep(corpus, damping, &ranks, &mut next);
        let delta = l1_delta(&ranks, &next);
        std::mem::swap(&mut ranks, &mut next);
        if delta < threshold {
            break;
        }
    }

    normalize(&mut ranks)?;
    Ok(ranks)
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if !(threshold.is_finite() && threshold > 0.0) {
        return Err(RankError::InvalidThreshold { value: threshold });
    }
    Ok(())
}

/// One full sweep: `next` is written entirely from `ranks`, never from
/// partially updated values.
#[allow(clippy::cast_precision_loss)]
fn sweep(corpus: &Corpus, damping: f64, ranks: &[f64], next: &mut [f64]) {
    let teleport = (1.0 - damping) / corpus.len() as f64;

    for page in 0..corpus.len() {
        let mut inbound = 0.0;
        // Every source in the in-link list has out_degree >= 1 by
        // construction.
        for &source in corpus.in_links(page) {
            inbound += ranks[source] / corpus.out_degree(source) as f64;
        }
        next[page] = teleport + damping * inbound;
    }
}

fn l1_delta(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new.iter())
        .map(|(o, n)| (o - n).abs())
        .sum()
}
