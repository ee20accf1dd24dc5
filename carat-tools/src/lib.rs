//! Typed access to the DIAMOND aligner
//!
//! This crate turns typed method calls into the argument vectors diamond's
//! own parser expects and hands them to an executor: the real binary in
//! production, a recording mock in tests.

// Modules
pub mod args;
pub mod diamond;
pub mod dispatch;
pub mod executors;
pub mod settings;
pub mod testing;
pub mod traits;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use args::{build_args, CommandLine, OptionValue, Options};
pub use diamond::{Diamond, MakeDbOptions, SearchMode, SearchParams};
pub use executors::ProcessExecutor;
pub use settings::{Flag, Flags, Settings};
pub use testing::MockExecutor;
pub use traits::DiamondExecutor;
pub use types::{FormatValue, OutFormat, OutputFormat, Sensitivity};
pub use validate::{BoundArguments, ParamDefault, ParamType, Signature};
