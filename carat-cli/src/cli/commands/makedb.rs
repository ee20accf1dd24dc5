use crate::cli::{context, GlobalArgs};
use carat_tools::MakeDbOptions;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct MakedbArgs {
    /// Input FASTA file (may be gzip compressed)
    #[arg(short = 'i', long = "in", value_name = "FASTA")]
    pub input: PathBuf,

    /// Accession to taxid mapping file
    #[arg(long)]
    pub taxonmap: Option<PathBuf>,

    /// NCBI taxonomy nodes.dmp
    #[arg(long)]
    pub taxonnodes: Option<PathBuf>,

    /// NCBI taxonomy names.dmp
    #[arg(long)]
    pub taxonnames: Option<PathBuf>,
}

pub fn run(global: &GlobalArgs, args: MakedbArgs) -> anyhow::Result<i32> {
    let diamond = context::diamond(global)?;
    let options = MakeDbOptions {
        taxonmap: args.taxonmap,
        taxonnodes: args.taxonnodes,
        taxonnames: args.taxonnames,
    };
    Ok(diamond.makedb(&args.input, &options)?)
}
