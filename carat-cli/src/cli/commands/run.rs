use super::{collect_options, parse_key_value};
use crate::cli::{context, GlobalArgs};
use carat_tools::OptionValue;
use clap::Args;

#[derive(Args)]
pub struct RunArgs {
    /// Keyword argument as key=value (repeatable)
    #[arg(long = "opt", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, OptionValue)>,

    /// Subcommand name; makedb, blastp, blastx and dbinfo are validated first
    pub name: String,

    /// Positional arguments, passed through as given
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub fn run(global: &GlobalArgs, args: RunArgs) -> anyhow::Result<i32> {
    let diamond = context::diamond(global)?;
    let positional = args.args.into_iter().map(OptionValue::from).collect();
    Ok(diamond.invoke(&args.name, positional, collect_options(args.options))?)
}
