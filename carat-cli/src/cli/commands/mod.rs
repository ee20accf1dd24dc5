pub mod dbinfo;
pub mod makedb;
pub mod run;
pub mod search;
pub mod version;

use carat_tools::{OptionValue, Options};

/// Parse `key=value`; the value is read as a JSON literal when it is one
pub fn parse_key_value(raw: &str) -> Result<(String, OptionValue), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;
    let key = key.trim().trim_start_matches("--");
    if key.is_empty() {
        return Err(format!("missing option name in '{}'", raw));
    }
    Ok((key.to_string(), OptionValue::parse_literal(value)))
}

pub fn collect_options(pairs: Vec<(String, OptionValue)>) -> Options {
    pairs.into_iter().collect()
}
