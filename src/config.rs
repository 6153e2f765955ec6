//! Configuration loading, validation, and sample path resolution

use crate::cli::Cli;
use crate::defaults;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Absolute path of the sample file to load
    pub sample_file: PathBuf,

    /// Number of load invocations per run
    #[serde(default = "default_num_times")]
    pub num_times: u32,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

fn default_num_times() -> u32 {
    defaults::NUM_TIMES
}

fn default_enable_color() -> bool {
    defaults::DEFAULT_ENABLE_COLOR
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_file: PathBuf::new(),
            num_times: default_num_times(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a configuration for a specific sample file, keeping all other defaults
    pub fn for_sample_file<P: Into<PathBuf>>(sample_file: P) -> Self {
        Self {
            sample_file: sample_file.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.sample_file.as_os_str().is_empty() {
            return Err(AppError::validation("Sample file path cannot be empty"));
        }

        if self.num_times == 0 {
            return Err(AppError::validation(
                "Load count must be at least 1 invocation",
            ));
        }

        Ok(())
    }
}

/// Resolve the sample file path relative to a base directory.
///
/// The layout convention places the sample one level above the directory
/// containing the program: `<base>/../example-files/tmp/xdf_001.xdf`.
pub fn resolve_sample_path(base_dir: &Path) -> PathBuf {
    base_dir
        .parent()
        .unwrap_or(base_dir)
        .join(defaults::SAMPLE_FILE_SUBPATH.iter().collect::<PathBuf>())
}

/// Resolve the default sample file path from the running executable's location
pub fn default_sample_path() -> Result<PathBuf> {
    let exe = env::current_exe()
        .map_err(|e| AppError::path_resolution(format!("Cannot locate executable: {}", e)))?;

    let exe_dir = exe.parent().ok_or_else(|| {
        AppError::path_resolution(format!(
            "Executable path has no parent directory: {}",
            exe.display()
        ))
    })?;

    Ok(resolve_sample_path(exe_dir))
}

/// Build the effective configuration from CLI flags and compiled-in defaults
pub fn load_config(cli: Cli) -> Result<Config> {
    cli.validate().map_err(AppError::config)?;

    let config = Config {
        sample_file: default_sample_path()?,
        num_times: defaults::NUM_TIMES,
        enable_color: cli.effective_color(defaults::DEFAULT_ENABLE_COLOR),
        verbose: cli.verbose,
        debug: cli.debug,
    };

    config.validate()?;
    Ok(config)
}
