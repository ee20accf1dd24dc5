pub mod commands;
pub mod context;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "carat",
    version,
    about = "Typed front end for the DIAMOND protein aligner",
    long_about = "Carat builds DIAMOND command lines from a persistent database, thread \
                  count and flag set, validates arguments before anything runs, and exits \
                  with DIAMOND's own exit code."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Settings shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// DIAMOND database file (overrides defaults.database)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Worker threads passed as --threads (overrides defaults.threads)
    #[arg(short = 'j', long, global = true)]
    pub threads: Option<usize>,

    /// Pass --quiet to diamond
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Pass --log to diamond
    #[arg(long, global = true)]
    pub log: bool,

    /// Pass --header to diamond
    #[arg(long, global = true)]
    pub header: bool,

    /// Config file (defaults to $CARAT_HOME/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// diamond executable (overrides diamond.binary and PATH lookup)
    #[arg(long, global = true, value_name = "PATH", env = "CARAT_DIAMOND")]
    pub diamond: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the configured database from a FASTA file
    Makedb(commands::makedb::MakedbArgs),

    /// Align protein queries against the database
    Blastp(commands::search::SearchArgs),

    /// Align translated DNA queries against the database
    Blastx(commands::search::SearchArgs),

    /// Print information about the database
    Dbinfo,

    /// Print the diamond version
    Version,

    /// Run any diamond subcommand by name
    Run(commands::run::RunArgs),
}
