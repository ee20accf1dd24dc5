pub mod process;

pub use process::{ProcessExecutor, DIAMOND_BINARY};
