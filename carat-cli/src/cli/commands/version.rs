use crate::cli::{context, GlobalArgs};
use carat_tools::DiamondExecutor;

/// Needs only the binary, not a database
pub fn run(global: &GlobalArgs) -> anyhow::Result<i32> {
    let config = context::config(global)?;
    let executor = context::executor(global, &config)?;
    println!("diamond {}", executor.version()?);
    Ok(0)
}
