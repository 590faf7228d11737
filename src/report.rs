// src/report.rs
//! Rank vector presentation: sorted text output and JSON export.

use std::collections::BTreeMap;
use std::fmt::Write;

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

use crate::corpus::Corpus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Renders one rank vector as a titled block, pages sorted by name and
/// values printed to four decimal places.
#[must_use]
pub fn render_text(corpus: &Corpus, title: &str, ranks: &[f64]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title.bold());

    for (name, rank) in named_ranks(corpus, ranks) {
        let _ = writeln!(out, "  {name}: {rank:.4}");
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    sampling: BTreeMap<&'a str, f64>,
    iteration: BTreeMap<&'a str, f64>,
}

/// Serializes both rank vectors as a JSON object keyed by page name.
/// `BTreeMap` keeps key order deterministic when the output is persisted.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(
    corpus: &Corpus,
    sampled: &[f64],
    iterated: &[f64],
) -> serde_json::Result<String> {
    let report = JsonReport {
        sampling: named_ranks(corpus, sampled).into_iter().collect(),
        iteration: named_ranks(corpus, iterated).into_iter().collect(),
    };
    serde_json::to_string_pretty(&report)
}

/// Pages paired with their ranks, ordered by descending rank with the
/// page name as tie-breaker so equal ranks always list the same way.
#[must_use]
pub fn ranked_pages<'a>(corpus: &'a Corpus, ranks: &[f64]) -> Vec<(&'a str, f64)> {
    let mut pairs = named_ranks(corpus, ranks);
    pairs.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    pairs
}

fn named_ranks<'a>(corpus: &'a Corpus, ranks: &[f64]) -> Vec<(&'a str, f64)> {
    let mut pairs: Vec<(&str, f64)> = corpus
        .pages()
        .map(|(idx, name)| (name, ranks.get(idx).copied().unwrap_or(0.0)))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs
}
