/// Traits for the external diamond collaborator
use carat_core::CaratResult;

/// The two entry points the wrapper needs from diamond
pub trait DiamondExecutor: Send + Sync {
    /// Run diamond with `args` (subcommand first) and return its exit code
    fn execute(&self, args: &[String]) -> CaratResult<i32>;

    /// Get the tool version
    fn version(&self) -> CaratResult<String>;

    /// Check if the tool can be invoked
    fn is_available(&self) -> bool {
        true
    }
}
