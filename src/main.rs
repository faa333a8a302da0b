use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use sitecore_provision::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    let name = args.command.log_name();
    logging::init_subscriber(args.verbose, name);
    let log = Arc::new(logging::Logger::new(name));

    match args.command {
        cli::Command::Import(opts) => commands::import::run(&args.global, &opts, &log),
        cli::Command::Validate(opts) => commands::validate::run(&args.global, &opts, &log),
        cli::Command::Completions(opts) => {
            commands::completions::run(&opts);
            Ok(())
        }
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
