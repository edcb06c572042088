//! Radix Sort Benchmark
//!
//! Times the base-10 LSD radix sort on arrays of growing size filled with
//! values below the array size, optionally next to the parallel-count variant
//! and the standard library sorts.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use decimal_radix_sort::harness::{Algorithm, Harness, HarnessConfig, DEFAULT_SIZES};
use decimal_radix_sort::report::BenchmarkReport;

/// Time base-10 LSD radix sort over a range of array sizes.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Array sizes to time (comma separated)
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Skip any size above this
    #[arg(long)]
    max_size: Option<usize>,

    /// Algorithms to run: radix_lsd, radix_parallel, std_unstable, std_stable
    #[arg(long, value_delimiter = ',', default_value = "radix_lsd")]
    algorithms: Vec<String>,

    /// Seed for reproducible inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Do not check results against the std sort
    #[arg(long, default_value_t = false)]
    no_verify: bool,

    /// Write a Links Notation report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write a Markdown report to this path
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(HarnessConfig, Outputs)> {
        let algorithms = self
            .algorithms
            .iter()
            .map(|name| name.parse::<Algorithm>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut sizes = self.sizes;
        if let Some(max) = self.max_size {
            sizes.retain(|&size| size <= max);
        }

        let config = HarnessConfig {
            sizes,
            algorithms,
            seed: self.seed,
            verify: !self.no_verify,
        };

        Ok((
            config,
            Outputs {
                lino: self.report,
                markdown: self.markdown,
            },
        ))
    }
}

struct Outputs {
    lino: Option<PathBuf>,
    markdown: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (config, outputs) = args.into_config()?;
    info!(
        sizes = ?config.sizes,
        algorithms = ?config.algorithms,
        seed = ?config.seed,
        "starting benchmark"
    );

    let sizes = config.sizes.clone();
    let mut harness = Harness::new(config);
    let mut report = BenchmarkReport::new("Base-10 LSD radix sort on values in [0, N)");

    for size in sizes {
        let results = harness
            .run_case(size)
            .with_context(|| format!("benchmark case of size {size} failed"))?;

        for result in results {
            println!(
                "Array of size {} sorted in {:.6} seconds ({}{}).",
                result.array_size,
                result.time_ms / 1000.0,
                result.algorithm,
                if harness.config().verify && !result.verified {
                    ", VERIFICATION FAILED"
                } else {
                    ""
                }
            );
            report.add_result(result);
        }
    }

    if let Some(path) = outputs.lino {
        report.save_lino(&path)?;
        info!(path = %path.display(), "wrote Links Notation report");
    }
    if let Some(path) = outputs.markdown {
        report.save_markdown(&path)?;
        info!(path = %path.display(), "wrote Markdown report");
    }

    Ok(())
}
