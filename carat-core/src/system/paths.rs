use std::path::PathBuf;
use std::sync::OnceLock;

static CARAT_HOME: OnceLock<PathBuf> = OnceLock::new();

/// Get the carat home directory
/// Checks CARAT_HOME environment variable, falls back to ${HOME}/.carat
pub fn carat_home() -> PathBuf {
    CARAT_HOME
        .get_or_init(|| {
            if let Ok(path) = std::env::var("CARAT_HOME") {
                PathBuf::from(path)
            } else {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".carat")
            }
        })
        .clone()
}

/// Default location of the configuration file
/// Returns: CARAT_HOME/config.toml
pub fn default_config_path() -> PathBuf {
    carat_home().join("config.toml")
}
