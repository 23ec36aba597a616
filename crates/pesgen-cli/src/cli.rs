use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "pesgen - Validate and plan ChIMES potential-energy-surface scans before handing them to the generator.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a scan configuration and summarize the scans it declares.
    Validate(ValidateArgs),
    /// Expand a scan configuration into scan jobs and optionally export the sample grid.
    Plan(PlanArgs),
    /// Write a commented template configuration to start from.
    Init(InitArgs),
}

/// Where the scan configuration comes from and how to override it.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the scan configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Override the ChIMES calculator repository path from the config file.
    #[arg(long, value_name = "PATH")]
    pub repository: Option<PathBuf>,

    /// Override the parameter file path from the config file.
    #[arg(long, value_name = "PATH")]
    pub parameter_file: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S scan.triplet.step=0.5
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Also check that the repository directory and parameter file exist.
    #[arg(long)]
    pub check_paths: bool,
}

/// Arguments for the `plan` subcommand.
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write every sample point of every job to this CSV file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Flag jobs that visit more cluster geometries than this.
    #[arg(long, value_name = "INT")]
    pub large_scan_threshold: Option<u64>,

    /// Check that the repository directory and parameter file exist before planning.
    #[arg(long)]
    pub check_paths: bool,
}

/// Arguments for the `init` subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the template (defaults to ./pesgen.toml).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
