//! Executor backed by the diamond binary

use crate::traits::DiamondExecutor;
use carat_core::{CaratError, CaratResult, Config};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the executable searched for on `PATH`
pub const DIAMOND_BINARY: &str = "diamond";

/// Runs diamond as a child process with inherited stdio
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    binary_path: PathBuf,
}

impl ProcessExecutor {
    /// Use the binary at `binary_path`
    pub fn new(binary_path: impl Into<PathBuf>) -> CaratResult<Self> {
        let binary_path = binary_path.into();
        if !binary_path.exists() {
            return Err(CaratError::NotFound(format!(
                "diamond binary not found at {}",
                binary_path.display()
            )));
        }
        Ok(Self { binary_path })
    }

    /// Find `diamond` on `PATH`
    pub fn locate() -> CaratResult<Self> {
        let binary_path = which::which(DIAMOND_BINARY).map_err(|e| {
            CaratError::NotFound(format!("{} not found on PATH: {}", DIAMOND_BINARY, e))
        })?;
        tracing::debug!(path = %binary_path.display(), "Located diamond");
        Ok(Self { binary_path })
    }

    /// Use `[diamond] binary` from the config when set, else search `PATH`
    pub fn from_config(config: &Config) -> CaratResult<Self> {
        match &config.diamond.binary {
            Some(path) => Self::new(path.clone()),
            None => Self::locate(),
        }
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }
}

impl DiamondExecutor for ProcessExecutor {
    fn execute(&self, args: &[String]) -> CaratResult<i32> {
        let status = Command::new(&self.binary_path)
            .args(args)
            .status()
            .map_err(|e| {
                CaratError::Execution(format!(
                    "Failed to run {}: {}",
                    self.binary_path.display(),
                    e
                ))
            })?;

        status
            .code()
            .ok_or_else(|| CaratError::Terminated(self.binary_path.display().to_string()))
    }

    fn version(&self) -> CaratResult<String> {
        let output = Command::new(&self.binary_path)
            .arg("version")
            .output()
            .map_err(|e| {
                CaratError::Execution(format!(
                    "Failed to run {} version: {}",
                    self.binary_path.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(CaratError::Execution(format!(
                "{} version exited with code {}: {}",
                self.binary_path.display(),
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        // diamond prints "diamond version 2.1.9"
        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.lines().next().unwrap_or("").trim();
        Ok(line
            .strip_prefix("diamond version")
            .map(str::trim)
            .unwrap_or(line)
            .to_string())
    }

    fn is_available(&self) -> bool {
        self.binary_path.is_file()
    }
}
