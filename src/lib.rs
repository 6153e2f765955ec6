//! XDF Load Benchmark
//!
//! A benchmark harness that times repeated loads of a fixed XDF sample
//! file and reports the total and average wall-clock durations.

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod output;
pub mod report;
pub mod runner;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, resolve_sample_path, Config};
pub use error::{AppError, Result};
pub use loader::{FsXdfLoader, LoadOutcome, XdfLoader};
pub use output::{ColoredFormatter, FormatterFactory, PlainFormatter, ReportFormatter};
pub use report::LoadReport;
pub use runner::BenchmarkRunner;
pub use types::PerformanceLevel;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    /// Number of load invocations per run
    pub const NUM_TIMES: u32 = 10;

    /// Sample file location relative to the parent of the executable's directory
    pub const SAMPLE_FILE_SUBPATH: &[&str] = &["example-files", "tmp", "xdf_001.xdf"];

    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
