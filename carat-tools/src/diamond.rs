//! The configured diamond facade: one method per modeled subcommand

use crate::args::{build_args, CommandLine, OptionValue, Options};
use crate::dispatch;
use crate::executors::ProcessExecutor;
use crate::settings::Settings;
use crate::traits::DiamondExecutor;
use crate::types::{OutputFormat, Sensitivity};
use carat_core::{CaratError, CaratResult, Config};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Optional NCBI taxonomy inputs for `makedb`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakeDbOptions {
    /// Accession to taxid mapping (gzip compressed)
    pub taxonmap: Option<PathBuf>,
    /// `nodes.dmp` from the NCBI taxonomy dump
    pub taxonnodes: Option<PathBuf>,
    /// `names.dmp` from the NCBI taxonomy dump
    pub taxonnames: Option<PathBuf>,
}

impl MakeDbOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_taxonmap(mut self, path: impl Into<PathBuf>) -> Self {
        self.taxonmap = Some(path.into());
        self
    }

    pub fn with_taxonnodes(mut self, path: impl Into<PathBuf>) -> Self {
        self.taxonnodes = Some(path.into());
        self
    }

    pub fn with_taxonnames(mut self, path: impl Into<PathBuf>) -> Self {
        self.taxonnames = Some(path.into());
        self
    }
}

/// Per-call search parameters for `blastp` and `blastx`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub outfmt: OutputFormat,
    pub sensitivity: Sensitivity,
    /// Passed through as `--key value` after the modeled options
    pub extra: Options,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outfmt(mut self, outfmt: impl Into<OutputFormat>) -> Self {
        self.outfmt = outfmt.into();
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Search modes sharing the `blastp` argument layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Protein query against a protein database
    Blastp,
    /// Translated DNA query against a protein database
    Blastx,
}

impl SearchMode {
    pub fn subcommand(&self) -> &'static str {
        match self {
            SearchMode::Blastp => "blastp",
            SearchMode::Blastx => "blastx",
        }
    }
}

/// A diamond installation bound to one database, thread count and flag set
pub struct Diamond {
    settings: Settings,
    executor: Arc<dyn DiamondExecutor>,
}

impl std::fmt::Debug for Diamond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diamond")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Diamond {
    pub fn new(settings: Settings, executor: Arc<dyn DiamondExecutor>) -> CaratResult<Self> {
        settings.validate()?;
        Ok(Self { settings, executor })
    }

    /// Facade running the diamond binary named in `config`, or found on `PATH`
    pub fn from_config(settings: Settings, config: &Config) -> CaratResult<Self> {
        let executor = ProcessExecutor::from_config(config)?;
        Self::new(settings, Arc::new(executor))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build a database from a FASTA file; creates the configured database
    pub fn makedb(&self, input: impl AsRef<Path>, options: &MakeDbOptions) -> CaratResult<i32> {
        let args = CommandLine::new("makedb")
            .arg("--in")
            .arg(input.as_ref().to_string_lossy())
            .option("taxonmap", options.taxonmap.as_ref())
            .option("taxonnodes", options.taxonnodes.as_ref())
            .option("taxonnames", options.taxonnames.as_ref())
            .build(Some(&self.settings));
        self.execute(args)
    }

    /// Align protein queries against the database
    pub fn blastp(
        &self,
        query: impl AsRef<Path>,
        out: impl AsRef<Path>,
        params: &SearchParams,
    ) -> CaratResult<i32> {
        self.search(SearchMode::Blastp, query.as_ref(), out.as_ref(), params)
    }

    /// Align translated DNA queries against the database
    pub fn blastx(
        &self,
        query: impl AsRef<Path>,
        out: impl AsRef<Path>,
        params: &SearchParams,
    ) -> CaratResult<i32> {
        self.search(SearchMode::Blastx, query.as_ref(), out.as_ref(), params)
    }

    pub fn search(
        &self,
        mode: SearchMode,
        query: &Path,
        out: &Path,
        params: &SearchParams,
    ) -> CaratResult<i32> {
        self.require_db()?;
        let args = CommandLine::new(mode.subcommand())
            .opt_arg(params.sensitivity.cmd_option())
            .option("query", query)
            .option("out", out)
            .option("outfmt", params.outfmt.value())
            .options(params.extra.clone())
            .build(Some(&self.settings));
        self.execute(args)
    }

    /// Print information about the configured database
    pub fn dbinfo(&self) -> CaratResult<i32> {
        self.require_db()?;
        let args = CommandLine::new("dbinfo").build(Some(&self.settings));
        self.execute(args)
    }

    pub fn version(&self) -> CaratResult<String> {
        self.executor.version()
    }

    /// Run any subcommand verbatim. The persistent database, thread and flag
    /// settings are not added: the wrapper cannot know whether `name` takes them.
    pub fn run_subcommand<I, S>(&self, name: &str, positional: I, options: Options) -> CaratResult<i32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if name.trim().is_empty() {
            return Err(CaratError::invalid_argument("name", "a non-empty subcommand"));
        }
        let tokens: Vec<String> = std::iter::once(name.to_string())
            .chain(positional.into_iter().map(|s| s.as_ref().to_string()))
            .collect();
        let args = build_args(tokens, None, options);
        self.execute(args)
    }

    /// Call a method by name with loosely typed arguments.
    ///
    /// Registered methods are validated against their declared signature
    /// first; any other name runs as a literal subcommand.
    pub fn invoke(
        &self,
        method: &str,
        positional: Vec<OptionValue>,
        keywords: Options,
    ) -> CaratResult<i32> {
        dispatch::invoke(self, method, positional, keywords)
    }

    fn require_db(&self) -> CaratResult<()> {
        if self.settings.database_exists() {
            Ok(())
        } else {
            Err(CaratError::MissingDatabase(self.settings.database().to_path_buf()))
        }
    }

    fn execute(&self, args: Vec<String>) -> CaratResult<i32> {
        let subcommand = args.first().map(String::as_str).unwrap_or_default();
        tracing::info!(subcommand, "Running diamond");
        tracing::debug!(?args, "diamond arguments");

        let code = self.executor.execute(&args)?;
        if code == 0 {
            tracing::info!(subcommand, "diamond finished");
        } else {
            tracing::warn!(subcommand, code, "diamond exited with non-zero status");
        }
        Ok(code)
    }
}
