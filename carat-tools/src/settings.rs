//! Persistent per-facade configuration: database, thread count and flags

use crate::args::{OptionValue, Options};
use carat_core::{CaratError, CaratResult, Config};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Boolean switches diamond accepts on every subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    /// Do not print progress information
    Quiet,
    /// Log progress information to a file
    Log,
    /// Print a header line in tabular output
    Header,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::Quiet, Flag::Log, Flag::Header];

    pub fn name(&self) -> &'static str {
        match self {
            Flag::Quiet => "quiet",
            Flag::Log => "log",
            Flag::Header => "header",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub quiet: bool,
    #[serde(default)]
    pub log: bool,
    #[serde(default)]
    pub header: bool,
}

impl Flags {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Quiet => self.quiet,
            Flag::Log => self.log,
            Flag::Header => self.header,
        }
    }

    pub fn set(&mut self, flag: Flag, enabled: bool) {
        match flag {
            Flag::Quiet => self.quiet = enabled,
            Flag::Log => self.log = enabled,
            Flag::Header => self.header = enabled,
        }
    }
}

/// Options appended to every database-bound invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    database: PathBuf,
    #[serde(default = "default_threads")]
    threads: usize,
    #[serde(default)]
    flags: Flags,
}

fn default_threads() -> usize {
    1
}

impl Settings {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
            threads: default_threads(),
            flags: Flags::default(),
        }
    }

    /// Settings seeded from the `[defaults]` table of a config file
    pub fn from_config(config: &Config, database: Option<PathBuf>) -> CaratResult<Self> {
        let database = database
            .or_else(|| config.defaults.database.clone())
            .ok_or_else(|| CaratError::MissingArgument("database".to_string()))?;
        let settings = Self::new(database)
            .with_threads(config.defaults.threads)
            .with_flag(Flag::Quiet, config.defaults.quiet)
            .with_flag(Flag::Log, config.defaults.log)
            .with_flag(Flag::Header, config.defaults.header);
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_flag(mut self, flag: Flag, enabled: bool) -> Self {
        self.flags.set(flag, enabled);
        self
    }

    pub fn quiet(self, enabled: bool) -> Self {
        self.with_flag(Flag::Quiet, enabled)
    }

    pub fn log(self, enabled: bool) -> Self {
        self.with_flag(Flag::Log, enabled)
    }

    pub fn header(self, enabled: bool) -> Self {
        self.with_flag(Flag::Header, enabled)
    }

    pub fn database(&self) -> &Path {
        &self.database
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn is_enabled(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }

    /// Checked against the filesystem on every call, never cached
    pub fn database_exists(&self) -> bool {
        self.database.exists()
    }

    pub fn validate(&self) -> CaratResult<()> {
        if self.database.as_os_str().is_empty() {
            return Err(CaratError::invalid_argument("database", "a non-empty path"));
        }
        if self.threads == 0 {
            return Err(CaratError::invalid_argument("threads", "a positive integer"));
        }
        Ok(())
    }

    pub(crate) fn value_options(&self) -> Options {
        let mut options = Options::with_capacity(2);
        options.insert("db".to_string(), OptionValue::from(self.database.as_path()));
        options.insert("threads".to_string(), OptionValue::from(self.threads));
        options
    }

    pub fn enabled_flags(&self) -> impl Iterator<Item = Flag> + '_ {
        Flag::ALL.into_iter().filter(move |flag| self.flags.get(*flag))
    }
}
