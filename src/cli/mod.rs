// src/cli/mod.rs
//! Command line front end: argument parsing and the run pipeline.

pub mod args;

pub use args::Cli;

use anyhow::Result;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Settings;
use crate::corpus::{crawl, Corpus};
use crate::rank::{iterate_pagerank_with, sample_pagerank, sample_pagerank_batched, sample_pagerank_with};
use crate::report::{self, OutputFormat};

/// Loads the corpus, runs both estimators, and prints both rank vectors.
///
/// # Errors
/// Returns an error if the corpus cannot be loaded or a parameter is
/// rejected.
pub fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings();
    settings.validate()?;

    let corpus = crawl::crawl(&cli.corpus)?;
    if cli.verbose {
        eprintln!(
            "{}",
            format!("Loaded {} pages from {}", corpus.len(), cli.corpus.display()).dimmed()
        );
    }

    let sampled = run_sampling(&corpus, &settings)?;
    let iterated = iterate_pagerank_with(&corpus, settings.damping, settings.threshold)?;

    match cli.format {
        OutputFormat::Text => {
            print!(
                "{}",
                report::render_text(
                    &corpus,
                    &format!("PageRank Results from Sampling (n = {})", settings.samples),
                    &sampled,
                )
            );
            print!(
                "{}",
                report::render_text(&corpus, "PageRank Results from Iteration", &iterated)
            );
        }
        OutputFormat::Json => {
            println!("{}", report::render_json(&corpus, &sampled, &iterated)?);
        }
    }

    Ok(())
}

fn run_sampling(corpus: &Corpus, settings: &Settings) -> crate::error::Result<Vec<f64>> {
    match (settings.batches, settings.seed) {
        (Some(batches), seed) if batches > 1 => sample_pagerank_batched(
            corpus,
            settings.damping,
            settings.samples,
            batches,
            seed.unwrap_or_else(rand::random),
        ),
        (_, Some(seed)) => sample_pagerank_with(
            corpus,
            settings.damping,
            settings.samples,
            &mut StdRng::seed_from_u64(seed),
        ),
        (_, None) => sample_pagerank(corpus, settings.damping, settings.samples),
    }
}
