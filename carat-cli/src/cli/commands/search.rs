use super::{collect_options, parse_key_value};
use crate::cli::{context, GlobalArgs};
use carat_tools::{OptionValue, OutputFormat, SearchMode, SearchParams, Sensitivity};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SearchArgs {
    /// Query FASTA/FASTQ file
    #[arg(short, long)]
    pub query: PathBuf,

    /// Output file
    #[arg(short, long)]
    pub out: PathBuf,

    /// Output format: code or name, optionally followed by columns ("6 qseqid sseqid")
    #[arg(short = 'f', long, default_value = "6")]
    pub outfmt: OutputFormat,

    /// Extra tabular columns (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Sensitivity mode (fast, mid-sensitive, default, sensitive, ...)
    #[arg(short, long, default_value = "default")]
    pub sensitivity: Sensitivity,

    /// Extra diamond option as key=value (repeatable)
    #[arg(long = "opt", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, OptionValue)>,
}

impl SearchArgs {
    fn params(self) -> SearchParams {
        SearchParams {
            outfmt: self.outfmt.with_extra_option(self.columns),
            sensitivity: self.sensitivity,
            extra: collect_options(self.options),
        }
    }
}

pub fn run(global: &GlobalArgs, args: SearchArgs, mode: SearchMode) -> anyhow::Result<i32> {
    let diamond = context::diamond(global)?;
    let query = args.query.clone();
    let out = args.out.clone();
    Ok(diamond.search(mode, &query, &out, &args.params())?)
}
