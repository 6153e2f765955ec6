//! Command-line interface module

use clap::Parser;

/// XDF Load Benchmark - times repeated loads of the bundled sample file
#[derive(Parser, Debug, Clone)]
#[command(name = "xdf-load-bench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        Ok(())
    }

    /// Resolve the effective color setting from the flags
    pub fn effective_color(&self, default_enable: bool) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            default_enable
        }
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            color: false,
            no_color: false,
            verbose: false,
            debug: false,
        }
    }
}
