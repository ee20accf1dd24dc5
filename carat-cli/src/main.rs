use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use carat_core::CaratError;
use carat_tools::SearchMode;

fn main() {
    // RUST_LOG wins, then CARAT_LOG
    let log_level = std::env::var("CARAT_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(exit_code(&e));
        }
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<CaratError>() {
        Some(CaratError::Configuration(_)) => 2,
        Some(CaratError::Io(_)) => 3,
        Some(CaratError::MissingDatabase(_)) => 5,
        Some(e) if e.is_argument_error() => 64,
        _ => 1,
    }
}

/// Returns the exit code diamond reported
fn run(cli: Cli) -> anyhow::Result<i32> {
    let global = cli.global;
    match cli.command {
        Commands::Makedb(args) => crate::cli::commands::makedb::run(&global, args),
        Commands::Blastp(args) => crate::cli::commands::search::run(&global, args, SearchMode::Blastp),
        Commands::Blastx(args) => crate::cli::commands::search::run(&global, args, SearchMode::Blastx),
        Commands::Dbinfo => crate::cli::commands::dbinfo::run(&global),
        Commands::Version => crate::cli::commands::version::run(&global),
        Commands::Run(args) => crate::cli::commands::run::run(&global, args),
    }
}
