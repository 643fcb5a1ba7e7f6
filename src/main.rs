use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use taillog_logs::{tail_path, TailError};

/// Taillog - Print JSON Lines log files as aligned text columns
#[derive(Parser, Debug)]
#[command(name = "taillog")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON Lines log file
    #[arg(value_name = "LOG_FILE")]
    log_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout carries formatted lines only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match tail_path(&args.log_file, &mut out) {
        Ok(summary) => {
            tracing::debug!(lines = summary.lines, path = %args.log_file.display(), "done");
            Ok(())
        }
        // Reader closed the pipe early; nothing left to report
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("stdout closed, stopping");
            Ok(())
        }
        // Already names the path
        Err(e @ TailError::Open { .. }) => Err(e.into()),
        Err(e) => Err(e).with_context(|| format!("cannot format {}", args.log_file.display())),
    }
}
