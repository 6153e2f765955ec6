//! Benchmark execution engine
//!
//! The measured region covers the repeated load invocations and nothing
//! else: configuration loading, loader construction, and path resolution
//! all happen before the clock starts.

use crate::config::Config;
use crate::error::Result;
use crate::loader::{FsXdfLoader, LoadOutcome, XdfLoader};
use crate::report::LoadReport;
use chrono::Utc;
use std::time::Instant;

/// Executes the timed load loop and produces a report
pub struct BenchmarkRunner<L: XdfLoader> {
    loader: L,
    config: Config,
}

impl BenchmarkRunner<FsXdfLoader> {
    /// Create a runner backed by the filesystem loader
    pub fn with_default_loader(config: Config) -> Self {
        Self::new(FsXdfLoader::new(), config)
    }
}

impl<L: XdfLoader> BenchmarkRunner<L> {
    /// Create a runner with a specific loader implementation
    pub fn new(loader: L, config: Config) -> Self {
        Self { loader, config }
    }

    /// Name of the loader driving this runner
    pub fn loader_name(&self) -> &'static str {
        self.loader.name()
    }

    /// Run the benchmark: `num_times` strictly sequential loads inside a
    /// single monotonic-clock measurement.
    ///
    /// The first load error aborts the run and propagates to the caller;
    /// no partial report is produced.
    pub fn run(&self) -> Result<LoadReport> {
        let path = &self.config.sample_file;
        let num_times = self.config.num_times;
        let started_at = Utc::now();

        let mut last_outcome = LoadOutcome { bytes_read: 0 };
        let timer = Instant::now();
        for _ in 0..num_times {
            last_outcome = self.loader.load(path)?;
        }
        let total_elapsed = timer.elapsed();

        Ok(LoadReport::new(
            path.clone(),
            num_times,
            total_elapsed,
            last_outcome.bytes_read,
            started_at,
        ))
    }
}
