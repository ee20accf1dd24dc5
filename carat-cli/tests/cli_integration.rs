mod common;

use anyhow::Result;
use predicates::prelude::*;

use common::*;

#[test]
fn test_cli_help_command() {
    let mut cmd = carat_cmd();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("DIAMOND"))
        .stdout(predicate::str::contains("makedb"))
        .stdout(predicate::str::contains("blastp"))
        .stdout(predicate::str::contains("blastx"))
        .stdout(predicate::str::contains("dbinfo"));
}

#[test]
fn test_cli_version_flag() {
    carat_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("carat"));
}

#[test]
fn test_search_help_lists_pass_through_option() {
    carat_cmd()
        .args(["blastp", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--opt"))
        .stdout(predicate::str::contains("--sensitivity"));
}

#[cfg(unix)]
#[test]
fn test_makedb_runs_diamond_with_settings() -> Result<()> {
    let env = TestEnvironment::new()?;
    let diamond = env.fake_diamond(0)?;
    let db = env.path("ref.dmnd");

    env.cmd()
        .arg("--diamond")
        .arg(&diamond)
        .arg("--db")
        .arg(&db)
        .args(["-j", "4", "--quiet", "makedb", "--in", "proteins.faa"])
        .assert()
        .success();

    assert_eq!(
        env.recorded_args()?,
        vec![
            "makedb".to_string(),
            "--in".into(),
            "proteins.faa".into(),
            "--db".into(),
            path_str(&db),
            "--threads".into(),
            "4".into(),
            "--quiet".into(),
        ]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_blastx_builds_full_command_line() -> Result<()> {
    let env = TestEnvironment::new()?;
    let diamond = env.fake_diamond(0)?;
    let db = env.create_file("ref.dmnd", "dmnd")?;

    env.cmd()
        .arg("--diamond")
        .arg(&diamond)
        .arg("--db")
        .arg(&db)
        .args([
            "blastx",
            "-q",
            "reads.fa",
            "-o",
            "hits.tsv",
            "--sensitivity",
            "more-sensitive",
            "--columns",
            "qseqid,sseqid",
            "--opt",
            "max_target_seqs=1",
        ])
        .assert()
        .success();

    assert_eq!(
        env.recorded_args()?,
        vec![
            "blastx".to_string(),
            "--more-sensitive".into(),
            "--query".into(),
            "reads.fa".into(),
            "--out".into(),
            "hits.tsv".into(),
            "--outfmt".into(),
            "6".into(),
            "qseqid".into(),
            "sseqid".into(),
            "--max-target-seqs".into(),
            "1".into(),
            "--db".into(),
            path_str(&db),
            "--threads".into(),
            "1".into(),
        ]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_exit_code_of_diamond_is_propagated() -> Result<()> {
    let env = TestEnvironment::new()?;
    let diamond = env.fake_diamond(7)?;
    let db = env.create_file("ref.dmnd", "dmnd")?;

    env.cmd()
        .arg("--diamond")
        .arg(&diamond)
        .arg("--db")
        .arg(&db)
        .arg("dbinfo")
        .assert()
        .code(7);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_version_does_not_need_database() -> Result<()> {
    let env = TestEnvironment::new()?;
    let diamond = env.fake_diamond(0)?;

    env.cmd()
        .arg("--diamond")
        .arg(&diamond)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("diamond 2.1.9"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_run_passes_unknown_subcommand_through() -> Result<()> {
    let env = TestEnvironment::new()?;
    let diamond = env.fake_diamond(0)?;

    env.cmd()
        .arg("--diamond")
        .arg(&diamond)
        .args(["--db", "unused.dmnd", "-j", "8", "--log"])
        .args(["run", "--opt", "daa=out.daa", "view", "--verbose"])
        .assert()
        .success();

    assert_eq!(
        env.recorded_args()?,
        vec!["view", "--verbose", "--daa", "out.daa"]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_config_file_supplies_defaults() -> Result<()> {
    let env = TestEnvironment::new()?;
    let diamond = env.fake_diamond(0)?;
    let db = env.create_file("ref.dmnd", "dmnd")?;
    env.create_file(
        "config.toml",
        &format!(
            "[diamond]\nbinary = \"{}\"\n\n[defaults]\ndatabase = \"{}\"\nthreads = 3\nheader = true\n",
            path_str(&diamond),
            path_str(&db)
        ),
    )?;

    env.cmd().arg("dbinfo").assert().success();

    assert_eq!(
        env.recorded_args()?,
        vec![
            "dbinfo".to_string(),
            "--db".into(),
            path_str(&db),
            "--threads".into(),
            "3".into(),
            "--header".into(),
        ]
    );
    Ok(())
}
