//! Core utilities and types shared across all carat crates

pub mod config;
pub mod error;
pub mod system;

pub use config::{load_config, load_config_or_default, save_config, Config};
pub use error::{CaratError, CaratResult};
pub use system::{carat_home, default_config_path};
