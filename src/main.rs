//! XDF Load Benchmark - Main CLI Application
//!
//! Times repeated loads of the bundled XDF sample file and prints the
//! total and average durations.

use clap::Parser;
use std::{error::Error, process};
use xdf_load_bench::{
    cli::Cli,
    config::load_config,
    error::Result,
    logging::LoggerFactory,
    output::FormatterFactory,
    runner::BenchmarkRunner,
};

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    // Handle the actual application logic
    if let Err(e) = run_application(cli) {
        eprintln!("Error: {}", e);

        if let Some(source) = e.source() {
            eprintln!("Caused by: {}", source);
        }

        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    // Load and validate configuration
    let config = load_config(cli)?;

    let logger_factory = LoggerFactory::new(config.clone());
    let logger = logger_factory.create_logger("BENCH");

    logger
        .debug("Configuration loaded")
        .field("sample_file", config.sample_file.display().to_string())
        .field("num_times", config.num_times)
        .field("color", config.enable_color)
        .log();

    // One-time setup stays outside the measured region
    let formatter = FormatterFactory::create_formatter(config.enable_color, config.verbose);
    let runner = BenchmarkRunner::with_default_loader(config.clone());

    println!("{}", formatter.format_loading_line(&config.sample_file));

    logger
        .debug("Starting measured region")
        .field("loader", runner.loader_name())
        .log();

    // Any load failure propagates; the timing lines are never printed
    let report = runner.run().inspect_err(|e| {
        logger.error("Benchmark run failed").error_info(e).log();
    })?;

    println!("{}", formatter.render(&report));

    if config.verbose {
        println!();
        println!("{}", formatter.format_summary(&report));
    }

    logger
        .debug("Run complete")
        .field("report", &report)
        .log();

    Ok(())
}
