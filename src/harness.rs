//! Benchmark Harness
//!
//! Generates arrays of `N` values drawn from `[0, N)`, times each selected
//! algorithm on its own copy of the same input, and checks the output against
//! the standard library sort.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::baseline_sort;
use crate::error::HarnessError;
use crate::parallel_radix_sort::parallel_radix_sort;
use crate::radix_sort::{digit_passes, radix_sort};
use crate::report::BenchmarkResult;

/// Array sizes timed when none are given.
pub const DEFAULT_SIZES: [usize; 7] = [
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
];

/// Largest size whose value range `[0, size)` still fits in `u32`.
pub const MAX_SIZE: usize = (u32::MAX as usize).saturating_add(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    RadixLsd,
    RadixParallel,
    StdUnstable,
    StdStable,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::RadixLsd,
        Algorithm::RadixParallel,
        Algorithm::StdUnstable,
        Algorithm::StdStable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::RadixLsd => "radix_lsd",
            Algorithm::RadixParallel => "radix_parallel",
            Algorithm::StdUnstable => "std_unstable",
            Algorithm::StdStable => "std_stable",
        }
    }

    pub fn is_radix(self) -> bool {
        matches!(self, Algorithm::RadixLsd | Algorithm::RadixParallel)
    }

    pub fn sort(self, data: &mut [u32]) {
        match self {
            Algorithm::RadixLsd => radix_sort(data),
            Algorithm::RadixParallel => parallel_radix_sort(data),
            Algorithm::StdUnstable => baseline_sort::sort_unstable(data),
            Algorithm::StdStable => baseline_sort::sort_stable(data),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| HarnessError::UnknownAlgorithm(s.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub sizes: Vec<usize>,
    pub algorithms: Vec<Algorithm>,
    /// Seed for reproducible inputs; entropy when unset
    pub seed: Option<u64>,
    /// Compare every output against the std sort
    pub verify: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            algorithms: vec![Algorithm::RadixLsd],
            seed: None,
            verify: true,
        }
    }
}

/// `size` values uniformly drawn from `[0, size)`.
pub fn generate_input<R: Rng>(size: usize, rng: &mut R) -> Result<Vec<u32>, HarnessError> {
    if size > MAX_SIZE {
        return Err(HarnessError::SizeOutOfRange {
            size,
            max: MAX_SIZE,
        });
    }

    Ok((0..size).map(|_| rng.gen_range(0..size) as u32).collect())
}

pub struct Harness {
    config: HarnessConfig,
    rng: StdRng,
}

impl Harness {
    pub fn new(config: HarnessConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Harness { config, rng }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Time every configured algorithm on one freshly generated input.
    pub fn run_case(&mut self, size: usize) -> Result<Vec<BenchmarkResult>, HarnessError> {
        let input = generate_input(size, &mut self.rng)?;
        let passes = input.iter().max().map_or(0, |&max| digit_passes(max));
        debug!(size, passes, "generated input");

        let expected = if self.config.verify {
            let mut expected = input.clone();
            baseline_sort::sort_unstable(&mut expected);
            Some(expected)
        } else {
            None
        };

        let mut results = Vec::with_capacity(self.config.algorithms.len());
        for &algorithm in &self.config.algorithms {
            let mut data = input.clone();
            let start = Instant::now();
            algorithm.sort(&mut data);
            let elapsed = start.elapsed();

            let verified = match &expected {
                Some(expected) => baseline_sort::is_sorted(&data) && data == *expected,
                None => false,
            };
            if expected.is_some() && !verified {
                warn!(%algorithm, size, "output failed verification");
            }
            debug!(%algorithm, size, ?elapsed, verified, "case finished");

            results.push(BenchmarkResult {
                algorithm: algorithm.name().to_string(),
                array_size: size,
                time_ms: elapsed.as_secs_f64() * 1000.0,
                verified,
                digit_passes: if algorithm.is_radix() { passes } else { 0 },
            });
        }

        Ok(results)
    }
}
