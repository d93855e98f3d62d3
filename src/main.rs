//! Herald CLI - notify watchers when annotated declarations change
//!
//! Usage: herald <COMMAND>
//!
//! Commands:
//!   run     Compare two revisions of a git repository and notify watchers
//!   diff    Compare two files or two directory trees
//!   parse   List the annotated regions of one file
//!   verify  Show the effective marker, notifiers and walkers

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use herald::presentation::{Cli, Commands};

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let globals = commands::Globals {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
        config: cli.config,
    };

    match cli.command {
        Commands::Run {
            repo,
            base,
            head,
            notifiers,
        } => commands::run::cmd_run(&repo, base, head, notifiers, &globals),
        Commands::Diff {
            previous,
            current,
            notifiers,
        } => commands::diff::cmd_diff(&previous, &current, notifiers, &globals),
        Commands::Parse { file } => commands::parse::cmd_parse(&file, &globals),
        Commands::Verify => commands::verify::cmd_verify(&globals),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
