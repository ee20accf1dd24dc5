mod common;

use anyhow::Result;
use predicates::prelude::*;

use common::*;

#[test]
fn test_missing_database_exit_code() -> Result<()> {
    let env = TestEnvironment::new()?;
    let binary = env.placeholder_binary()?;

    env.cmd()
        .arg("--diamond")
        .arg(&binary)
        .arg("--db")
        .arg(env.path("absent.dmnd"))
        .args(["blastp", "-q", "q.faa", "-o", "out.tsv"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("makedb"));
    Ok(())
}

#[test]
fn test_no_database_configured_is_argument_error() -> Result<()> {
    let env = TestEnvironment::new()?;
    let binary = env.placeholder_binary()?;

    env.cmd()
        .arg("--diamond")
        .arg(&binary)
        .arg("dbinfo")
        .assert()
        .code(64)
        .stderr(predicate::str::contains("database"));
    Ok(())
}

#[test]
fn test_zero_threads_rejected() -> Result<()> {
    let env = TestEnvironment::new()?;
    let binary = env.placeholder_binary()?;

    env.cmd()
        .arg("--diamond")
        .arg(&binary)
        .args(["--db", "d.dmnd", "-j", "0", "makedb", "--in", "x.faa"])
        .assert()
        .code(64);
    Ok(())
}

#[test]
fn test_run_validates_registered_methods() -> Result<()> {
    let env = TestEnvironment::new()?;
    let binary = env.placeholder_binary()?;

    env.cmd()
        .arg("--diamond")
        .arg(&binary)
        .args(["--db", "d.dmnd", "run", "--opt", "bogus=1", "makedb", "in.faa"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("bogus"));
    Ok(())
}

#[test]
fn test_invalid_sensitivity_is_usage_error() {
    carat_cmd()
        .args(["blastp", "-q", "q", "-o", "o", "--sensitivity", "turbo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("turbo"));
}

#[test]
fn test_malformed_config_exit_code() -> Result<()> {
    let env = TestEnvironment::new()?;
    let config = env.create_file("broken.toml", "[defaults]\nthreads = \"many\"\n")?;

    env.cmd()
        .arg("--config")
        .arg(&config)
        .arg("version")
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn test_missing_explicit_config_is_io_error() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.cmd()
        .arg("--config")
        .arg(env.path("nope.toml"))
        .arg("version")
        .assert()
        .code(3);
    Ok(())
}

#[test]
fn test_missing_binary_reports_error() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.cmd()
        .arg("--diamond")
        .arg(env.path("no-such-diamond"))
        .arg("version")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
    Ok(())
}
