//! Recording executor for tests

use crate::traits::DiamondExecutor;
use carat_core::CaratResult;
use parking_lot::Mutex;

/// Executor that records every argument vector instead of running diamond
pub struct MockExecutor {
    calls: Mutex<Vec<Vec<String>>>,
    exit_code: i32,
    version: String,
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockExecutor {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            exit_code: 0,
            version: "2.1.9".to_string(),
        }
    }

    /// Exit code returned by every `execute`
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<Vec<String>> {
        self.calls.lock().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl DiamondExecutor for MockExecutor {
    fn execute(&self, args: &[String]) -> CaratResult<i32> {
        self.calls.lock().push(args.to_vec());
        Ok(self.exit_code)
    }

    fn version(&self) -> CaratResult<String> {
        Ok(self.version.clone())
    }
}
