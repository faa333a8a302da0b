//! Command-line interface definitions.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "sitecore-provision",
    about = "Provision Sitecore templates, renderings and data folders from component definitions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Settings file (TOML); environment variables override its values
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Walk the definitions without contacting the endpoint
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create all items described by a definitions file
    Import(ImportOpts),
    /// Check a definitions file without creating anything
    Validate(ValidateOpts),
    /// Print shell completions
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the log file of this command.
    #[must_use]
    pub const fn log_name(&self) -> &'static str {
        match self {
            Self::Import(_) => "import",
            Self::Validate(_) => "validate",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}

/// Options for the `import` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ImportOpts {
    /// Directory containing sitecore-template.json, or the file itself
    pub path: PathBuf,

    /// Write the creation summaries as JSON
    #[arg(long)]
    pub summary_out: Option<PathBuf>,

    /// Write every created item as JSON (also written when the run fails)
    #[arg(long)]
    pub run_log: Option<PathBuf>,
}

/// Options for the `validate` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ValidateOpts {
    /// Directory containing sitecore-template.json, or the file itself
    pub path: PathBuf,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Target shell
    pub shell: clap_complete::Shell,
}
