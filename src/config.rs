// src/config.rs
//! Estimator settings: defaults, `surfrank.toml` loading, validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rank::{iterate, sample, transition};

pub const SETTINGS_FILE: &str = "surfrank.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Probability of following an out-link instead of teleporting.
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Number of random-surfer steps for the sampling estimator.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// L1 convergence threshold for the iterative estimator.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// RNG seed; sampling runs are reproducible when set.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of parallel sampling batches. Unset means one single
    /// in-process walk.
    #[serde(default)]
    pub batches: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            threshold: default_threshold(),
            seed: None,
            batches: None,
        }
    }
}

const fn default_damping() -> f64 { 0.85 }
const fn default_samples() -> usize { 10_000 }
const fn default_threshold() -> f64 { 0.0005 }

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from `surfrank.toml` in `dir`, falling back to the
    /// defaults when the file is missing or does not parse.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        match fs::read_to_string(dir.join(SETTINGS_FILE)) {
            Ok(content) => Self::parse_toml(&content),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    pub fn parse_toml(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    /// Applies the parameter checks shared with the estimators.
    ///
    /// # Errors
    /// Returns the first failing parameter as a typed error.
    pub fn validate(&self) -> Result<()> {
        transition::validate_damping(self.damping)?;
        sample::validate_samples(self.samples)?;
        iterate::validate_threshold(self.threshold)?;
        Ok(())
    }
}
