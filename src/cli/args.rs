// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

use crate::config::Settings;
use crate::report::OutputFormat;

#[derive(Parser)]
#[command(name = "surfrank", version, about = "Page importance estimation for a web corpus")]
pub struct Cli {
    /// Directory of HTML pages to rank
    pub corpus: PathBuf,

    /// Damping factor for the random surfer
    #[arg(long)]
    pub damping: Option<f64>,

    /// Number of random-walk samples
    #[arg(long)]
    pub samples: Option<usize>,

    /// Convergence threshold for the iterative solver
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Seed for the sampling RNG; runs are reproducible when set
    #[arg(long)]
    pub seed: Option<u64>,

    /// Split sampling into this many parallel batches
    #[arg(long)]
    pub batches: Option<usize>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Settings from `surfrank.toml` next to the corpus, with command
    /// line flags taking precedence.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::load(&self.corpus);

        if let Some(damping) = self.damping {
            settings.damping = damping;
        }
        if let Some(samples) = self.samples {
            settings.samples = samples;
        }
        if let Some(threshold) = self.threshold {
            settings.threshold = threshold;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.batches.is_some() {
            settings.batches = self.batches;
        }

        settings
    }
}
