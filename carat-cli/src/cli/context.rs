//! Resolves config file, CLI overrides and the diamond binary into a facade

use super::GlobalArgs;
use carat_core::{default_config_path, load_config, load_config_or_default, CaratError, Config};
use carat_tools::{Diamond, DiamondExecutor, Flag, ProcessExecutor, Settings};
use std::sync::Arc;

/// An explicit `--config` must exist; the default location may be absent
pub fn config(global: &GlobalArgs) -> anyhow::Result<Config> {
    let config = match &global.config {
        Some(path) => load_config(path)?,
        None => load_config_or_default(default_config_path())?,
    };
    Ok(config)
}

pub fn settings(global: &GlobalArgs, config: &Config) -> anyhow::Result<Settings> {
    let mut settings = Settings::from_config(config, global.db.clone())?;
    if let Some(threads) = global.threads {
        settings = settings.with_threads(threads);
    }
    for (flag, enabled) in [
        (Flag::Quiet, global.quiet),
        (Flag::Log, global.log),
        (Flag::Header, global.header),
    ] {
        if enabled {
            settings = settings.with_flag(flag, true);
        }
    }
    Ok(settings)
}

pub fn executor(global: &GlobalArgs, config: &Config) -> anyhow::Result<ProcessExecutor> {
    let executor = match &global.diamond {
        Some(path) => ProcessExecutor::new(path)?,
        None => ProcessExecutor::from_config(config)?,
    };
    if !executor.is_available() {
        return Err(CaratError::NotFound(format!(
            "diamond binary at {} is not a file",
            executor.binary_path().display()
        ))
        .into());
    }
    tracing::debug!(binary = %executor.binary_path().display(), "Using diamond");
    Ok(executor)
}

pub fn diamond(global: &GlobalArgs) -> anyhow::Result<Diamond> {
    let config = config(global)?;
    let settings = settings(global, &config)?;
    let executor = executor(global, &config)?;
    Ok(Diamond::new(settings, Arc::new(executor))?)
}
