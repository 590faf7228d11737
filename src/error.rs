// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("corpus contains no pages")]
    EmptyCorpus,

    #[error("damping factor {value} is outside [0, 1]")]
    InvalidDamping { value: f64 },

    #[error("sample count must be at least 1 (got {value})")]
    InvalidSampleCount { value: usize },

    #[error("convergence threshold must be positive and finite (got {value})")]
    InvalidThreshold { value: f64 },

    #[error("rank mass degenerated to a non-positive total; no distribution can be returned")]
    DegenerateMass,

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
