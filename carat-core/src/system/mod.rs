pub mod paths;

pub use paths::{carat_home, default_config_path};
