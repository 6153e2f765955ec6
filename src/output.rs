//! Output formatting and display
//!
//! The three benchmark lines are part of the tool's contract and render
//! byte-identically in every formatter; color and the verbose summary
//! section are presentation extras layered on top.

use crate::report::LoadReport;
use crate::types::PerformanceLevel;
use std::fmt::Write as _;
use std::path::Path;

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Enable verbose mode with the summary section
    pub verbose_mode: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
        }
    }
}

/// Main trait for benchmark output formatting
pub trait ReportFormatter {
    /// Format the line announcing which file is being loaded
    fn format_loading_line(&self, path: &Path) -> String {
        format!("Loading file: {}", path.display())
    }

    /// Format the total elapsed time line
    fn format_total_line(&self, num_times: u32, total_secs: f64) -> String {
        format!("Time to load {} times: {} seconds", num_times, total_secs)
    }

    /// Format the average time line
    fn format_average_line(&self, average_secs: f64) -> String {
        format!("Average time to load: {} seconds", average_secs)
    }

    /// Render the timing lines for a completed run
    fn render(&self, report: &LoadReport) -> String {
        format!(
            "{}\n{}",
            self.format_total_line(report.num_times, report.total_secs()),
            self.format_average_line(report.average_secs())
        )
    }

    /// Format the verbose summary section
    fn format_summary(&self, report: &LoadReport) -> String;
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    #[allow(dead_code)]
    options: FormattingOptions,
}

impl PlainFormatter {
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl ReportFormatter for PlainFormatter {
    fn format_summary(&self, report: &LoadReport) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "Summary:");
        let _ = writeln!(output, "  File size: {} bytes", report.bytes_read);
        let _ = writeln!(
            output,
            "  Average per load: {:.3} ms ({})",
            report.average_ms(),
            report.performance_level().label()
        );
        let _ = write!(
            output,
            "  Throughput: {:.2} MB/s",
            report.throughput_mb_per_sec()
        );
        output
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    #[allow(dead_code)]
    options: FormattingOptions,
}

impl ColoredFormatter {
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    fn colorize_level(&self, level: PerformanceLevel) -> String {
        use colored::Colorize;
        match level {
            PerformanceLevel::Good => level.label().green().to_string(),
            PerformanceLevel::Moderate => level.label().yellow().to_string(),
            PerformanceLevel::Poor => level.label().red().to_string(),
        }
    }
}

impl ReportFormatter for ColoredFormatter {
    fn format_summary(&self, report: &LoadReport) -> String {
        use colored::Colorize;
        let mut output = String::new();
        let _ = writeln!(output, "{}", "Summary:".bold());
        let _ = writeln!(output, "  File size: {} bytes", report.bytes_read);
        let _ = writeln!(
            output,
            "  Average per load: {:.3} ms ({})",
            report.average_ms(),
            self.colorize_level(report.performance_level())
        );
        let _ = write!(
            output,
            "  Throughput: {:.2} MB/s",
            report.throughput_mb_per_sec()
        );
        output
    }
}

/// Output formatting factory for creating appropriate formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool, verbose: bool) -> Box<dyn ReportFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }
}
