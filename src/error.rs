use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing benchmark reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to access report file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no benchmark results found in report")]
    Empty,
}

/// Errors raised by the benchmark harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("array size {size} cannot be filled with u32 values in [0, size); the largest supported size is {max}")]
    SizeOutOfRange { size: usize, max: usize },

    #[error("unknown algorithm '{0}' (expected one of: radix_lsd, radix_parallel, std_unstable, std_stable)")]
    UnknownAlgorithm(String),
}
