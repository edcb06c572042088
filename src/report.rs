//! Links Notation (Lino) Benchmark Reports
//!
//! Benchmark runs are recorded in Links Notation, a small indentation-based
//! format of named links:
//!
//! ```text
//! benchmark_report:
//!   timestamp '2026-01-01T00:00:00Z'
//!   description 'LSD radix sort timings'
//!
//! results:
//!   size_1000:
//!     radix_lsd:
//!       time_ms 0.012
//!       verified true
//!       digit_passes 3
//! ```
//!
//! Reports can also be rendered as Markdown tables (see the `lino2md` binary).

use std::fmt::Write;
use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};

use crate::error::ReportError;
use crate::harness::Algorithm;

/// Timing of one algorithm on one array size.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Algorithm name as printed by [`Algorithm::name`]
    pub algorithm: String,
    /// Array size in elements
    pub array_size: usize,
    /// Execution time in milliseconds
    pub time_ms: f64,
    /// Whether the output was sorted and matched the baseline
    pub verified: bool,
    /// Digit passes the radix sort needed (0 for comparison sorts)
    pub digit_passes: usize,
}

#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// RFC 3339 timestamp of the run
    pub timestamp: String,
    pub description: String,
    pub system_info: SystemInfo,
    pub results: Vec<BenchmarkResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    /// Worker threads available to rayon, if known
    pub threads: Option<usize>,
}

impl Default for SystemInfo {
    fn default() -> Self {
        SystemInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            threads: Some(rayon::current_num_threads()),
        }
    }
}

impl SystemInfo {
    /// Placeholder for reports that do not record the machine they ran on.
    pub fn unknown() -> Self {
        SystemInfo {
            os: "unknown".to_string(),
            arch: "unknown".to_string(),
            threads: None,
        }
    }
}

impl BenchmarkReport {
    pub fn new(description: &str) -> Self {
        BenchmarkReport {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            description: description.to_string(),
            system_info: SystemInfo::default(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Distinct array sizes in ascending order.
    fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.results.iter().map(|r| r.array_size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    fn find(&self, size: usize, algorithm: &str) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.array_size == size && r.algorithm == algorithm)
    }

    /// Algorithms present in the report, in [`Algorithm::ALL`] order, then
    /// any unrecognised names in order of appearance.
    fn algorithms(&self) -> Vec<String> {
        let mut names: Vec<String> = Algorithm::ALL
            .iter()
            .map(|a| a.name().to_string())
            .filter(|name| self.results.iter().any(|r| &r.algorithm == name))
            .collect();

        for result in &self.results {
            if !names.contains(&result.algorithm) {
                names.push(result.algorithm.clone());
            }
        }

        names
    }

    /// Generate the report in Links Notation format
    pub fn to_lino(&self) -> String {
        let mut output = String::new();

        // Writing into a String cannot fail.
        let _ = self.write_lino(&mut output);
        output
    }

    fn write_lino(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "benchmark_report:")?;
        writeln!(output, "  timestamp '{}'", self.timestamp)?;
        writeln!(output, "  description '{}'", escape_lino_string(&self.description))?;

        writeln!(output)?;
        writeln!(output, "system_info:")?;
        writeln!(output, "  os '{}'", escape_lino_string(&self.system_info.os))?;
        writeln!(output, "  arch '{}'", escape_lino_string(&self.system_info.arch))?;
        if let Some(threads) = self.system_info.threads {
            writeln!(output, "  threads {}", threads)?;
        }

        let sizes = self.sizes();

        writeln!(output)?;
        writeln!(output, "results:")?;
        for &size in &sizes {
            writeln!(output, "  size_{}:", size)?;
            for result in self.results.iter().filter(|r| r.array_size == size) {
                writeln!(output, "    {}:", result.algorithm)?;
                // Shortest exact form; short sorts take well under a microsecond.
                writeln!(output, "      time_ms {}", result.time_ms)?;
                writeln!(output, "      verified {}", result.verified)?;
                writeln!(output, "      digit_passes {}", result.digit_passes)?;
            }
        }

        // Every algorithm relative to the std baseline.
        let baseline = Algorithm::StdUnstable.name();
        writeln!(output)?;
        writeln!(output, "comparisons:")?;
        for &size in &sizes {
            let Some(base) = self.find(size, baseline) else {
                continue;
            };

            writeln!(output, "  size_{}:", size)?;
            for result in self
                .results
                .iter()
                .filter(|r| r.array_size == size && r.algorithm != baseline)
            {
                let ratio = speedup(base.time_ms, result.time_ms);
                writeln!(output, "    {}_vs_{}:", result.algorithm, baseline)?;
                writeln!(output, "      speedup {:.2}", ratio)?;
                writeln!(
                    output,
                    "      faster {}",
                    if ratio > 1.0 { result.algorithm.as_str() } else { baseline }
                )?;
            }
        }

        Ok(())
    }

    pub fn save_lino(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.to_lino()).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Generate a markdown table from the report
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();

        // Writing into a String cannot fail.
        let _ = self.write_markdown(&mut output);
        output
    }

    fn write_markdown(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "# Radix Sort Benchmark Report")?;
        writeln!(output)?;
        writeln!(output, "**Timestamp:** {}", self.timestamp)?;
        writeln!(output, "**Description:** {}", self.description)?;
        writeln!(output)?;

        writeln!(output, "## System Information")?;
        writeln!(output)?;
        writeln!(output, "| Property | Value |")?;
        writeln!(output, "|----------|-------|")?;
        writeln!(output, "| OS | {} |", self.system_info.os)?;
        writeln!(output, "| Arch | {} |", self.system_info.arch)?;
        match self.system_info.threads {
            Some(threads) => writeln!(output, "| Threads | {} |", threads)?,
            None => writeln!(output, "| Threads | unknown |")?,
        }
        writeln!(output)?;

        let algorithms = self.algorithms();
        let sizes = self.sizes();

        writeln!(output, "## Benchmark Results")?;
        writeln!(output)?;
        write!(output, "| Size | Digit passes |")?;
        for name in &algorithms {
            write!(output, " {} (ms) |", name)?;
        }
        writeln!(output)?;
        write!(output, "|------|--------------|")?;
        for _ in &algorithms {
            write!(output, "------|")?;
        }
        writeln!(output)?;

        for &size in &sizes {
            let passes = self
                .results
                .iter()
                .filter(|r| r.array_size == size)
                .map(|r| r.digit_passes)
                .max()
                .unwrap_or(0);

            write!(output, "| {} | {} |", format_size(size), passes)?;
            for name in &algorithms {
                let cell = match self.find(size, name) {
                    Some(r) if r.verified => format_ms(r.time_ms),
                    Some(r) => format!("{} (unverified)", format_ms(r.time_ms)),
                    None => "N/A".to_string(),
                };
                write!(output, " {} |", cell)?;
            }
            writeln!(output)?;
        }

        writeln!(output)?;
        writeln!(output, "---")?;
        writeln!(output, "*Report generated by radix-bench*")?;

        Ok(())
    }

    pub fn save_markdown(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.to_markdown_table()).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// How many times faster `candidate_ms` is than `baseline_ms`.
fn speedup(baseline_ms: f64, candidate_ms: f64) -> f64 {
    if candidate_ms > 0.0 {
        baseline_ms / candidate_ms
    } else {
        f64::INFINITY
    }
}

/// Escape a string for a single-quoted Lino value. Line breaks are escaped
/// too, since the format is line based.
fn escape_lino_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }

    escaped
}

fn unescape_lino_string(s: &str) -> String {
    let mut unescaped = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some('r') => unescaped.push('\r'),
            Some(other) => unescaped.push(other),
            None => unescaped.push('\\'),
        }
    }

    unescaped
}

/// Milliseconds for display: three decimals, or scientific notation for
/// sub-microsecond values that would otherwise print as zero.
fn format_ms(ms: f64) -> String {
    if ms == 0.0 || ms >= 0.001 {
        format!("{:.3}", ms)
    } else {
        format!("{:.3e}", ms)
    }
}

/// Format a size as a human-readable string (e.g., "1K", "1M")
fn format_size(size: usize) -> String {
    if size >= 1_000_000_000 {
        format!("{}G", size / 1_000_000_000)
    } else if size >= 1_000_000 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

/// Parse a Links Notation report produced by [`BenchmarkReport::to_lino`].
///
/// Only the metadata and the `results:` section are read back; comparisons
/// are derived data.
pub fn parse_lino_report(content: &str) -> Result<BenchmarkReport, ReportError> {
    let mut report = BenchmarkReport {
        timestamp: "unknown".to_string(),
        description: String::new(),
        system_info: SystemInfo::unknown(),
        results: Vec::new(),
    };
    let mut current_size: Option<usize> = None;
    let mut current_result: Option<BenchmarkResult> = None;
    let mut in_results_section = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Top-level section headers are not indented.
        if !line.starts_with(' ') {
            if let Some(result) = current_result.take() {
                report.results.push(result);
            }
            in_results_section = trimmed == "results:";
            current_size = None;
            continue;
        }

        if !in_results_section {
            if let Some(ts) = extract_quoted_value(trimmed, "timestamp") {
                report.timestamp = ts;
            } else if let Some(desc) = extract_quoted_value(trimmed, "description") {
                report.description = desc;
            } else if let Some(os) = extract_quoted_value(trimmed, "os") {
                report.system_info.os = os;
            } else if let Some(arch) = extract_quoted_value(trimmed, "arch") {
                report.system_info.arch = arch;
            } else if let Some(threads) = trimmed.strip_prefix("threads ") {
                if let Ok(threads) = threads.parse() {
                    report.system_info.threads = Some(threads);
                }
            }
            continue;
        }

        if let Some(size) = trimmed
            .strip_prefix("size_")
            .and_then(|s| s.strip_suffix(':'))
        {
            if let Some(result) = current_result.take() {
                report.results.push(result);
            }
            current_size = size.parse().ok();
            continue;
        }

        if let Some(size) = current_size {
            if let Some(algorithm) = trimmed.strip_suffix(':').filter(|a| !a.contains(' ')) {
                if let Some(result) = current_result.take() {
                    report.results.push(result);
                }
                current_result = Some(BenchmarkResult {
                    algorithm: algorithm.to_string(),
                    array_size: size,
                    time_ms: 0.0,
                    verified: false,
                    digit_passes: 0,
                });
                continue;
            }
        }

        if let Some(ref mut result) = current_result {
            if let Some(time) = trimmed.strip_prefix("time_ms ") {
                if let Ok(time) = time.parse() {
                    result.time_ms = time;
                }
            } else if let Some(verified) = trimmed.strip_prefix("verified ") {
                result.verified = verified == "true";
            } else if let Some(passes) = trimmed.strip_prefix("digit_passes ") {
                if let Ok(passes) = passes.parse() {
                    result.digit_passes = passes;
                }
            }
        }
    }

    if let Some(result) = current_result {
        report.results.push(result);
    }

    if report.results.is_empty() {
        Err(ReportError::Empty)
    } else {
        Ok(report)
    }
}

pub fn load_lino_report(path: &Path) -> Result<BenchmarkReport, ReportError> {
    let content = fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lino_report(&content)
}

fn extract_quoted_value(line: &str, key: &str) -> Option<String> {
    let value = line.strip_prefix(key)?.strip_prefix(' ')?.trim();
    value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .map(unescape_lino_string)
}
