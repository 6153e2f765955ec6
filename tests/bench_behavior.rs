//! End-to-end behavior of the benchmark pipeline at the library level
//!
//! A complete sample layout is built under a temporary directory:
//!
//!   <base>/bin/              (stands in for the executable's directory)
//!   <base>/example-files/tmp/xdf_001.xdf
//!
//! and the full pipeline (path resolution, timed run, rendering) is
//! exercised against it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use xdf_load_bench::{
    loader::{LoadOutcome, XdfLoader},
    output::{FormattingOptions, PlainFormatter},
    resolve_sample_path, BenchmarkRunner, Config, ReportFormatter, Result,
};

/// Build the on-disk layout the path resolution convention expects
fn create_sample_layout(contents: &[u8]) -> (TempDir, PathBuf, PathBuf) {
    let base = TempDir::new().unwrap();
    let bin_dir = base.path().join("bin");
    fs::create_dir_all(&bin_dir).unwrap();

    let sample_dir = base.path().join("example-files").join("tmp");
    fs::create_dir_all(&sample_dir).unwrap();
    let sample_file = sample_dir.join("xdf_001.xdf");
    fs::write(&sample_file, contents).unwrap();

    (base, bin_dir, sample_file)
}

/// Run the whole pipeline and capture the three output lines
fn run_pipeline(config: Config) -> Result<Vec<String>> {
    let formatter = PlainFormatter::new(FormattingOptions::default());
    let runner = BenchmarkRunner::with_default_loader(config.clone());

    let mut lines = vec![formatter.format_loading_line(&config.sample_file)];
    let report = runner.run()?;
    lines.extend(formatter.render(&report).lines().map(String::from));
    Ok(lines)
}

#[test]
fn test_resolution_finds_sample_in_layout() {
    let (_base, bin_dir, sample_file) = create_sample_layout(b"XDF:data");
    assert_eq!(resolve_sample_path(&bin_dir), sample_file);
}

#[test]
fn test_resolution_is_deterministic_across_calls() {
    let (_base, bin_dir, _sample_file) = create_sample_layout(b"XDF:data");
    let first = resolve_sample_path(&bin_dir);
    let second = resolve_sample_path(&bin_dir);
    assert_eq!(first, second);
}

#[test]
fn test_successful_run_prints_three_lines_in_order() {
    let (_base, bin_dir, _sample_file) = create_sample_layout(b"XDF:stream data");
    let config = Config::for_sample_file(resolve_sample_path(&bin_dir));

    let lines = run_pipeline(config).unwrap();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Loading file: "));
    assert!(lines[0].ends_with("xdf_001.xdf"));
    assert!(lines[1].starts_with("Time to load 10 times: "));
    assert!(lines[1].ends_with(" seconds"));
    assert!(lines[2].starts_with("Average time to load: "));
    assert!(lines[2].ends_with(" seconds"));
}

#[test]
fn test_printed_average_is_printed_total_over_ten() {
    let (_base, bin_dir, _sample_file) = create_sample_layout(b"XDF:stream data");
    let config = Config::for_sample_file(resolve_sample_path(&bin_dir));

    let lines = run_pipeline(config).unwrap();

    let total: f64 = lines[1]
        .strip_prefix("Time to load 10 times: ")
        .and_then(|s| s.strip_suffix(" seconds"))
        .unwrap()
        .parse()
        .unwrap();
    let average: f64 = lines[2]
        .strip_prefix("Average time to load: ")
        .and_then(|s| s.strip_suffix(" seconds"))
        .unwrap()
        .parse()
        .unwrap();

    // Default f64 formatting round-trips exactly, so the relation is exact
    assert_eq!(average, total / 10.0);
    assert!(total >= 0.0);
}

#[test]
fn test_missing_sample_aborts_before_timing_lines() {
    let (_base, bin_dir, sample_file) = create_sample_layout(b"XDF:data");
    fs::remove_file(&sample_file).unwrap();

    let config = Config::for_sample_file(resolve_sample_path(&bin_dir));
    let err = run_pipeline(config).unwrap_err();
    assert_eq!(err.category(), "IO");
}

#[test]
fn test_malformed_sample_aborts_run() {
    let (_base, bin_dir, _sample_file) = create_sample_layout(b"not an xdf container");
    let config = Config::for_sample_file(resolve_sample_path(&bin_dir));

    let err = run_pipeline(config).unwrap_err();
    assert_eq!(err.category(), "LOAD");
}

/// Loader that counts invocations through the public trait
struct CountingLoader {
    calls: Arc<AtomicU32>,
}

impl XdfLoader for CountingLoader {
    fn load(&self, _path: &Path) -> Result<LoadOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(LoadOutcome { bytes_read: 32 })
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

#[test]
fn test_default_run_performs_exactly_ten_loads() {
    let calls = Arc::new(AtomicU32::new(0));
    let loader = CountingLoader {
        calls: Arc::clone(&calls),
    };
    let config = Config::for_sample_file("/ignored/xdf_001.xdf");
    let runner = BenchmarkRunner::new(loader, config);

    let report = runner.run().unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 10);
    assert_eq!(report.num_times, 10);
    assert_eq!(report.average_secs(), report.total_secs() / 10.0);
}
