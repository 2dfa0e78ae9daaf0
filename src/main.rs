//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::format::{OutputFormat, to_format_string, write_to_format};
use chatlens::pipeline::Analyzer;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.log_level());

    if let Err(e) = run(&args) {
        if e.is_rejected_transcript() {
            debug!(error = %e, "transcript rejected");
            eprintln!("❌ Invalid or unsupported transcript");
        } else {
            eprintln!("❌ Error: {}", e);
        }
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let start = Instant::now();
    let analyzer = Analyzer::with_config(args.analyzer_config());
    let top_senders = analyzer.config().top_senders;
    let format: OutputFormat = args.format.into();

    debug!(input = %args.input.display(), %format, "analyzing transcript");
    let analysis = analyzer.analyze_path(&args.input)?;
    debug!(elapsed_ms = start.elapsed().as_millis(), "analysis finished");

    match &args.output {
        Some(path) => {
            write_to_format(&analysis, path, format, top_senders)?;
            println!("📦 chatlens v{}", env!("CARGO_PKG_VERSION"));
            println!("📂 Input:    {}", args.input.display());
            println!(
                "📊 Messages: {} of {} lines ({} matched a message format)",
                analysis.counts.retained_records,
                analysis.counts.total_lines,
                analysis.counts.matched_lines
            );
            println!("✅ {} report saved to {}", format, path.display());
        }
        None => {
            let report = to_format_string(&analysis, format, top_senders)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            if !report.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
