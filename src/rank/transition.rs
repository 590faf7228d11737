// src/rank/transition.rs
//! The random-surfer transition model.

use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Probability distribution over the next page to visit from `page`.
///
/// With probability `damping`, the surfer follows one of `page`'s
/// out-links chosen uniformly; with probability `1 - damping`, it jumps
/// to any corpus page uniformly. A page with no out-links (or an index
/// outside the corpus) teleports uniformly instead, so total mass stays
/// at 1 without self-loops.
///
/// The returned vector has one entry per corpus page, in index order,
/// and sums to 1.
///
/// # Errors
/// Returns `RankError::InvalidDamping` if `damping` is outside [0, 1].
pub fn transition_model(corpus: &Corpus, page: usize, damping: f64) -> Result<Vec<f64>> {
    validate_damping(damping)?;
    Ok(transition_unchecked(corpus, page, damping))
}

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(RankError::InvalidDamping { value: damping });
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn transition_unchecked(corpus: &Corpus, page: usize, damping: f64) -> Vec<f64> {
    let n = corpus.len() as f64;
    let links = corpus.out_links(page);

    if links.is_empty() {
        return vec![1.0 / n; corpus.len()];
    }

    let mut dist = vec![(1.0 - damping) / n; corpus.len()];
    let share = damping / links.len() as f64;
    for &target in links {
        dist[target] += share;
    }
    dist
}
