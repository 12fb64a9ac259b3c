use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use logcheck_core::config::Config;
use logcheck_core::trace::{TraceSink, TraceTarget};
use logcheck_core::{batch, runner, RunOptions};

#[derive(Parser)]
#[command(name = "logcheck", about = "Assert how often patterns occur in log files")]
struct Cli {
    /// Batch file of `<options>:<occurrences>:<logfile>:<string>` records.
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Trace destination: stdout, stderr, none, or a file path.
    #[arg(short, long, value_name = "DEST")]
    output: Option<String>,

    /// Configuration file (defaults to ./logcheck.toml when present).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a JSON report of every test case to this path.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Include found and expected counts in failure lines.
    #[arg(long)]
    show_counts: bool,

    /// Log debug diagnostics to stderr (RUST_LOG still takes precedence).
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("logcheck: invalid configuration: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let target = match cli.output.as_deref() {
        Some(dest) => {
            let Ok(target) = dest.parse::<TraceTarget>();
            target
        }
        None => config.trace_target(),
    };
    let mut trace = match target.open() {
        Ok(trace) => trace,
        Err(err) => {
            eprintln!("logcheck: cannot open trace output {target}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match check(&cli, &config, &mut trace) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "run aborted");
            // The trace sink may itself be what failed.
            let _ = writeln!(trace, "{err:#}");
            let _ = trace.flush();
            ExitCode::FAILURE
        }
    }
}

/// Load the batch, run it, and export the report. `Ok(false)` means at least
/// one test case did not pass.
fn check(cli: &Cli, config: &Config, trace: &mut TraceSink) -> anyhow::Result<bool> {
    if config.trace.banner {
        writeln!(trace, "-- logcheck --")?;
    }

    let cases = batch::load_batch(&cli.input).context("error reading batch file")?;
    let options = RunOptions {
        show_counts: cli.show_counts || config.run_options().show_counts,
    };
    let report = runner::run_all(&cases, trace, &options)?;

    if let Some(path) = &cli.report {
        let file = std::fs::File::create(path)
            .with_context(|| format!("cannot create report {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        report.write_json(&mut writer)?;
        writer.flush()?;
    }

    Ok(report.passed())
}
