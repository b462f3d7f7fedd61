use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("unknown trial: {0}")]
    UnknownTrial(String),
    #[error("key {key} missing from {container} (run its population trial first)")]
    MissingKey { key: String, container: &'static str },
    #[error("trace output failed: {0}")]
    Trace(#[from] io::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;
