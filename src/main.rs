mod analyze;
mod cli;
mod config;
mod dispatch;
mod error;
mod report;
mod source;
mod types;

use crate::error::WellnessError;
use crate::source::SnapshotSet;
use crate::types::config::WellnessConfig;
use crate::types::snapshot::Period;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DEGRADED: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_source(
    root: &std::path::Path,
    config: &WellnessConfig,
    args: &cli::SnapshotArgs,
) -> Result<SnapshotSet, WellnessError> {
    let path: PathBuf = match (&args.snapshots, config.snapshots_path()) {
        (Some(path), _) => path.clone(),
        (None, Some(path)) => root.join(path),
        (None, None) => {
            return Err(WellnessError::SnapshotUnavailable(
                "no snapshot file given (use --snapshots or [snapshots].path)".to_string(),
            ))
        }
    };
    source::load_snapshots(&path).map_err(|e| match e {
        WellnessError::Io(io) => {
            WellnessError::SnapshotUnavailable(format!("{}: {}", path.display(), io))
        }
        other => other,
    })
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn finish(
    view: report::View<'_>,
    degraded: Option<&str>,
    format: cli::ReportFormat,
    quiet: bool,
) -> Result<i32, WellnessError> {
    let rendered = report::render(view, output_format(format))?;
    println!("{rendered}");
    match degraded {
        None => Ok(exit_code::SUCCESS),
        Some(reason) => {
            if !quiet {
                eprintln!("warning: degraded result: {reason}");
            }
            Ok(exit_code::DEGRADED)
        }
    }
}

fn run(cli: cli::Cli) -> Result<i32, WellnessError> {
    let config = config::load_config(&cli.root)?.unwrap_or_default();
    let policy = config.burnout_policy();

    match cli.command {
        cli::Commands::Health(cmd) => {
            let snapshots = load_source(&cli.root, &config, &cmd.source)?;
            let outcome = analyze::team_health::assess(&snapshots);
            finish(
                report::View::TeamHealth(outcome.value()),
                outcome.degraded_reason(),
                cmd.format,
                cli.quiet,
            )
        }
        cli::Commands::Focus(cmd) => {
            let snapshots = load_source(&cli.root, &config, &cmd.report.source)?;
            let period = Period::new(cmd.days.unwrap_or_else(|| config.default_days()));
            let outcome = analyze::focus::assess(&snapshots, cmd.account.as_deref(), period);
            finish(
                report::View::Focus(outcome.value()),
                outcome.degraded_reason(),
                cmd.report.format,
                cli.quiet,
            )
        }
        cli::Commands::Suggest(cmd) => {
            let snapshots = load_source(&cli.root, &config, &cmd.source)?;
            let outcome = analyze::advisor::assess(&snapshots);
            finish(
                report::View::Suggestions(outcome.value()),
                outcome.degraded_reason(),
                cmd.format,
                cli.quiet,
            )
        }
        cli::Commands::Burnout(cmd) => {
            let snapshots = load_source(&cli.root, &config, &cmd.report.source)?;
            let outcome = analyze::burnout::assess(&snapshots, cmd.account.as_deref(), &policy);
            finish(
                report::View::Burnout(outcome.value()),
                outcome.degraded_reason(),
                cmd.report.format,
                cli.quiet,
            )
        }
        cli::Commands::Dashboard(cmd) => {
            let snapshots = load_source(&cli.root, &config, &cmd.report.source)?;
            let outcome = analyze::dashboard(&snapshots, cmd.account.as_deref(), &policy);
            finish(
                report::View::Dashboard(outcome.value()),
                outcome.degraded_reason(),
                cmd.report.format,
                cli.quiet,
            )
        }
        cli::Commands::Invoke(cmd) => {
            let snapshots = load_source(&cli.root, &config, &cmd.source)?;
            let outcome = dispatch::dispatch(&cmd.function, &cmd.payload, &snapshots, &config);
            let rendered = serde_json::to_string_pretty(outcome.value())?;
            println!("{rendered}");
            if outcome.is_degraded() {
                Ok(exit_code::DEGRADED)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
