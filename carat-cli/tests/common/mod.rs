#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated CARAT_HOME plus a scratch area for databases and outputs
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// A file that satisfies the binary existence check but is never run
    pub fn placeholder_binary(&self) -> Result<PathBuf> {
        self.create_file("diamond-placeholder", "")
    }

    /// Executable script that writes its arguments to `args.txt` and exits
    /// with `exit_code`; `version` prints a diamond-style version line
    #[cfg(unix)]
    pub fn fake_diamond(&self, exit_code: i32) -> Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"version\" ]; then echo \"diamond version 2.1.9\"; exit 0; fi\n\
             printf '%s\\n' \"$@\" > \"{}\"\n\
             exit {}\n",
            self.path("args.txt").display(),
            exit_code
        );
        let path = self.create_file("diamond", &script)?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    pub fn recorded_args(&self) -> Result<Vec<String>> {
        Ok(fs::read_to_string(self.path("args.txt"))?
            .lines()
            .map(str::to_string)
            .collect())
    }

    /// `carat` with CARAT_HOME pointed at this environment
    pub fn cmd(&self) -> Command {
        let mut cmd = carat_cmd();
        cmd.env("CARAT_HOME", self.temp_dir.path())
            .env_remove("CARAT_DIAMOND")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn carat_cmd() -> Command {
    Command::cargo_bin("carat").unwrap()
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
