// src/rank/sample.rs
//! Monte-Carlo estimator: a long random-surfer walk with visit tallies.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::transition::{transition_unchecked, validate_damping};
use super::normalize;
use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Estimates PageRank by sampling `samples` surfer steps with the thread
/// RNG. Not reproducible across runs; see [`sample_pagerank_with`] for a
/// seeded walk.
///
/// # Errors
/// Rejects `damping` outside [0, 1] and `samples` below 1.
pub fn sample_pagerank(corpus: &Corpus, damping: f64, samples: usize) -> Result<Vec<f64>> {
    sample_pagerank_with(corpus, damping, samples, &mut rand::thread_rng())
}

/// Estimates PageRank by sampling `samples` surfer steps driven by `rng`.
///
/// The walk starts at a page chosen uniformly, then repeatedly draws the
/// next page from the transition model and tallies the visit. Counters
/// are seeded with `1/N` per page and normalized at the end, so the
/// result is a distribution over the whole corpus even for tiny sample
/// counts.
///
/// # Errors
/// Rejects `damping` outside [0, 1] and `samples` below 1.
pub fn sample_pagerank_with<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    validate_damping(damping)?;
    validate_samples(samples)?;

    let mut counts = walk_counts(corpus, damping, samples, rng);
    finish_counts(corpus, &mut counts)?;
    Ok(counts)
}

/// Estimates PageRank by splitting the walk into `batches` statistically
/// independent walks run on the rayon pool, each driven by an RNG derived
/// from `seed` and the batch number. Batch counters are merged by
/// elementwise sum, then normalized once.
///
/// # Errors
/// Rejects `damping` outside [0, 1] and `samples` below 1.
pub fn sample_pagerank_batched(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    batches: usize,
    seed: u64,
) -> Result<Vec<f64>> {
    validate_damping(damping)?;
    validate_samples(samples)?;

    let n = corpus.len();
    let mut counts = split_quota(samples, batches.max(1))
        .into_par_iter()
        .enumerate()
        .map(|(batch, quota)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(batch as u64));
            walk_counts(corpus, damping, quota, &mut rng)
        })
        .reduce(|| vec![0.0; n], merge_counts);

    finish_counts(corpus, &mut counts)?;
    Ok(counts)
}

pub(crate) fn validate_samples(samples: usize) -> Result<()> {
    if samples < 1 {
        return Err(RankError::InvalidSampleCount { value: samples });
    }
    Ok(())
}

fn walk_counts<R: Rng + ?Sized>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Vec<f64> {
    let mut counts = vec![0.0; corpus.len()];
    let mut page = rng.gen_range(0..corpus.len());

    for _ in 0..samples {
        let dist = transition_unchecked(corpus, page, damping);
        page = weighted_choice(&dist, rng.gen::<f64>());
        counts[page] += 1.0;
    }

    counts
}

#[allow(clippy::cast_precision_loss)]
fn finish_counts(corpus: &Corpus, counts: &mut [f64]) -> Result<()> {
    let seed_count = 1.0 / corpus.len() as f64;
    for count in counts.iter_mut() {
        *count += seed_count;
    }
    normalize(counts)
}

/// Draws an index from `dist` using a single uniform variate in [0, 1).
///
/// Walks the cumulative sum; floating-point shortfall at the tail falls
/// through to the last index so the draw is always total.
fn weighted_choice(dist: &[f64], variate: f64) -> usize {
    let mut cumulative = 0.0;
    for (idx, &weight) in dist.iter().enumerate() {
        cumulative += weight;
        if variate < cumulative {
            return idx;
        }
    }
    dist.len() - 1
}

/// Splits `samples` into `batches` near-equal quotas summing to `samples`.
fn split_quota(samples: usize, batches: usize) -> Vec<usize> {
    let base = samples / batches;
    let remainder = samples % batches;
    (0..batches)
        .map(|b| base + usize::from(b < remainder))
        .collect()
}

fn merge_counts(mut left: Vec<f64>, right: Vec<f64>) -> Vec<f64> {
    for (l, r) in left.iter_mut().zip(right) {
        *l += r;
    }
    left
}
