//! Command-line synthesis: turns positional tokens and named options into the
//! flat argument vector diamond's parser expects.

use crate::settings::Settings;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A loosely typed option value as accepted at the dynamic call boundary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<OptionValue>),
}

/// Named options in insertion order
pub type Options = IndexMap<String, OptionValue>;

impl OptionValue {
    /// Falsy values (null, false, zero, empty string, empty list) emit no tokens
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Null => false,
            OptionValue::Bool(b) => *b,
            OptionValue::Int(i) => *i != 0,
            OptionValue::Float(f) => *f != 0.0,
            OptionValue::Str(s) => !s.is_empty(),
            OptionValue::List(items) => !items.is_empty(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    /// Short type name used in validation messages
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Null => "null",
            OptionValue::Bool(_) => "bool",
            OptionValue::Int(_) => "int",
            OptionValue::Float(_) => "float",
            OptionValue::Str(_) => "str",
            OptionValue::List(_) => "list",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Parse a command-line literal: JSON scalars and arrays are recognised,
    /// anything else is kept as a plain string
    pub fn parse_literal(raw: &str) -> Self {
        serde_json::from_str::<OptionValue>(raw).unwrap_or_else(|_| OptionValue::Str(raw.to_string()))
    }

    fn push_tokens(&self, args: &mut Vec<String>) {
        match self {
            OptionValue::Bool(true) => {}
            OptionValue::List(items) => args.extend(items.iter().map(ToString::to_string)),
            other => args.push(other.to_string()),
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Null => Ok(()),
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Int(i) => write!(f, "{}", i),
            OptionValue::Float(x) => write!(f, "{}", x),
            OptionValue::Str(s) => write!(f, "{}", s),
            OptionValue::List(items) => {
                let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "{}", joined.join(" "))
            }
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

impl From<&Path> for OptionValue {
    fn from(path: &Path) -> Self {
        OptionValue::Str(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for OptionValue {
    fn from(path: PathBuf) -> Self {
        OptionValue::from(path.as_path())
    }
}

impl From<&PathBuf> for OptionValue {
    fn from(path: &PathBuf) -> Self {
        OptionValue::from(path.as_path())
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        OptionValue::Int(i64::from(i))
    }
}

impl From<u32> for OptionValue {
    fn from(i: u32) -> Self {
        OptionValue::Int(i64::from(i))
    }
}

impl From<usize> for OptionValue {
    fn from(i: usize) -> Self {
        i64::try_from(i)
            .map(OptionValue::Int)
            .unwrap_or_else(|_| OptionValue::Str(i.to_string()))
    }
}

impl From<f64> for OptionValue {
    fn from(x: f64) -> Self {
        OptionValue::Float(x)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(OptionValue::Null)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(items: Vec<T>) -> Self {
        OptionValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// `snake_case` option keys become diamond's `kebab-case` flags
pub fn flag_name(key: &str) -> String {
    format!("--{}", key.trim_start_matches('-').replace('_', "-"))
}

fn normalize_key(key: &str) -> String {
    key.trim_start_matches('-').replace('-', "_")
}

/// Build the argument vector for one invocation.
///
/// Positional tokens come first (empty ones dropped), then every truthy option
/// as `--key value...`. With `settings`, the persistent `db` and `threads`
/// values overwrite call-site options of the same name and the enabled flags
/// are appended last, replacing any call-site option of the same name.
pub fn build_args<I, S>(positional: I, settings: Option<&Settings>, options: Options) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args: Vec<String> = positional
        .into_iter()
        .filter(|token| !token.as_ref().is_empty())
        .map(|token| token.as_ref().to_string())
        .collect();

    let mut merged = Options::with_capacity(options.len() + 2);
    for (key, value) in options {
        merged.insert(normalize_key(&key), value);
    }
    if let Some(settings) = settings {
        for (key, value) in settings.value_options() {
            merged.insert(normalize_key(&key), value);
        }
        // Enabled flags are appended below
        for flag in settings.enabled_flags() {
            merged.shift_remove(flag.name());
        }
    }

    for (key, value) in &merged {
        if !value.is_truthy() {
            continue;
        }
        args.push(flag_name(key));
        value.push_tokens(&mut args);
    }

    if let Some(settings) = settings {
        args.extend(settings.enabled_flags().map(|flag| flag_name(flag.name())));
    }

    args
}

/// Incremental builder over [`build_args`]
#[derive(Debug, Clone, Default)]
pub struct CommandLine {
    positional: Vec<String>,
    options: Options,
}

impl CommandLine {
    pub fn new(subcommand: impl Into<String>) -> Self {
        Self {
            positional: vec![subcommand.into()],
            options: Options::new(),
        }
    }

    pub fn arg(mut self, token: impl AsRef<str>) -> Self {
        self.positional.push(token.as_ref().to_string());
        self
    }

    /// Push a token only when present, e.g. a sensitivity flag
    pub fn opt_arg<S: AsRef<str>>(self, token: Option<S>) -> Self {
        match token {
            Some(token) => self.arg(token),
            None => self,
        }
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn options(mut self, options: Options) -> Self {
        self.options.extend(options);
        self
    }

    pub fn build(self, settings: Option<&Settings>) -> Vec<String> {
        build_args(self.positional, settings, self.options)
    }
}
