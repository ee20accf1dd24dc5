use crate::cli::{context, GlobalArgs};

pub fn run(global: &GlobalArgs) -> anyhow::Result<i32> {
    let diamond = context::diamond(global)?;
    Ok(diamond.dbinfo()?)
}
