use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wellness",
    version,
    about = "Team wellness scoring from issue-tracker snapshots"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding wellness.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score team health from issue counts
    Health(ReportArgs),
    /// Generate a focus report for an account
    Focus(FocusCommand),
    /// Suggest wellness actions for the current workload
    Suggest(ReportArgs),
    /// Classify burnout risk from recent activity
    Burnout(AccountCommand),
    /// Show focus, task load, burnout and team metrics together
    Dashboard(AccountCommand),
    /// Call a function by name and print its JSON result
    Invoke(InvokeCommand),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct SnapshotArgs {
    /// Snapshot file (.toml or .json); defaults to [snapshots].path
    #[arg(short, long)]
    pub snapshots: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SnapshotArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct AccountCommand {
    #[command(flatten)]
    pub report: ReportArgs,
    #[arg(long)]
    pub account: Option<String>,
}

#[derive(Args)]
pub struct FocusCommand {
    #[command(flatten)]
    pub report: ReportArgs,
    #[arg(long)]
    pub account: Option<String>,
    /// Window length; defaults to [focus].default_days
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,
}

#[derive(Args)]
pub struct InvokeCommand {
    /// Function name, e.g. getFocusScore
    pub function: String,
    #[command(flatten)]
    pub source: SnapshotArgs,
    /// JSON payload
    #[arg(long, default_value = "{}")]
    pub payload: String,
}
