//! modiff CLI
//!
//! Changelogs between two revisions of a mod collection, on demand or as a
//! line-oriented chat listener.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use modiff_core::errors::ModiffError;
use modiff_engine::frontend::user_message;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "modiff")]
#[command(about = "modiff - Mod collection revision changelogs", long_about = None)]
struct Cli {
    /// Config file (default: modiff.toml in the working directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Diff two revisions of a collection
    Diff(commands::diff::DiffArgs),
    /// Answer diff commands read line by line from stdin
    Listen(commands::listen::ListenArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, config_path).await,
        Commands::Listen(args) => commands::listen::execute(args, config_path).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}

/// Usage errors exit 2 like clap's own, everything else exits 1.
///
/// Command errors are shown as the same short text chat users get; their
/// detail stays in the logs. Configuration and setup errors are shown in
/// full.
fn report_failure(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<commands::Answered>().is_some() {
        return ExitCode::FAILURE;
    }

    match err.downcast_ref::<ModiffError>() {
        Some(e) if matches!(e, ModiffError::Usage { .. }) => {
            eprintln!("{}", user_message(e));
            ExitCode::from(2)
        }
        Some(e) if !matches!(e, ModiffError::Config { .. }) => {
            eprintln!("{}", user_message(e));
            ExitCode::FAILURE
        }
        _ => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
