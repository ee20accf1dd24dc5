use carat_core::CaratError;
use carat_tools::{
    Diamond, DiamondExecutor, Flag, MakeDbOptions, MockExecutor, OptionValue, Options,
    OutFormat, OutputFormat, SearchParams, Sensitivity, Settings,
};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Stand-in for `diamond makedb`: creates the database file it is pointed at
struct CreatingExecutor {
    inner: MockExecutor,
}

impl DiamondExecutor for CreatingExecutor {
    fn execute(&self, args: &[String]) -> carat_core::CaratResult<i32> {
        if args.first().map(String::as_str) == Some("makedb") {
            if let Some(pos) = args.iter().position(|a| a == "--db") {
                std::fs::write(&args[pos + 1], b"dmnd")?;
            }
        }
        self.inner.execute(args)
    }

    fn version(&self) -> carat_core::CaratResult<String> {
        self.inner.version()
    }
}

fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("cafa4.dmnd")
}

#[test]
fn test_makedb_then_search_workflow() {
    let dir = TempDir::new().unwrap();
    let db = db_path(&dir);
    let executor = Arc::new(CreatingExecutor {
        inner: MockExecutor::new(),
    });
    let diamond = Diamond::new(Settings::new(&db).with_threads(4), executor.clone()).unwrap();

    assert!(matches!(diamond.dbinfo(), Err(CaratError::MissingDatabase(_))));

    assert_eq!(diamond.makedb("test_proteins.fasta", &MakeDbOptions::new()).unwrap(), 0);
    assert!(db.exists());

    assert_eq!(diamond.dbinfo().unwrap(), 0);
    assert_eq!(
        diamond
            .blastp("test_proteins.fasta", "test_blastp_output", &SearchParams::new())
            .unwrap(),
        0
    );

    let calls = executor.inner.calls();
    let subcommands: Vec<&str> = calls.iter().map(|c| c[0].as_str()).collect();
    assert_eq!(subcommands, vec!["makedb", "dbinfo", "blastp"]);
    for call in &calls {
        assert_eq!(call.iter().filter(|a| *a == "--db").count(), 1);
        assert_eq!(call.iter().filter(|a| *a == "--threads").count(), 1);
    }
}

#[test]
fn test_end_to_end_makedb_tokens() {
    let mock = Arc::new(MockExecutor::new());
    let diamond = Diamond::new(Settings::new("d.dmnd").with_threads(4), mock.clone()).unwrap();

    diamond.makedb("in.fasta", &MakeDbOptions::default()).unwrap();

    assert_eq!(
        mock.calls(),
        vec![vec!["makedb", "--in", "in.fasta", "--db", "d.dmnd", "--threads", "4"]]
    );
}

#[test]
fn test_dynamic_dispatch_ignores_configuration() {
    let mock = Arc::new(MockExecutor::new());
    let settings = Settings::new("d.dmnd")
        .with_threads(4)
        .with_flag(Flag::Quiet, true)
        .with_flag(Flag::Log, true);
    let diamond = Diamond::new(settings, mock.clone()).unwrap();

    diamond.invoke("test", Vec::new(), Options::new()).unwrap();
    diamond.run_subcommand("test", Vec::<&str>::new(), Options::new()).unwrap();

    assert_eq!(mock.calls(), vec![vec!["test"], vec!["test"]]);
}

#[test]
fn test_reusing_output_format_does_not_accumulate_columns() {
    let dir = TempDir::new().unwrap();
    let db = db_path(&dir);
    std::fs::write(&db, b"dmnd").unwrap();
    let mock = Arc::new(MockExecutor::new());
    let diamond = Diamond::new(Settings::new(&db), mock.clone()).unwrap();

    let base = OutputFormat::tabular();
    let first = SearchParams::new().with_outfmt(base.clone().with_extra_option(["qseqid"]));
    let second = SearchParams::new().with_outfmt(base.clone());

    diamond.blastp("a.faa", "a.tsv", &first).unwrap();
    diamond.blastp("b.faa", "b.tsv", &second).unwrap();

    let outfmt_tokens = |call: &Vec<String>| -> Vec<String> {
        let start = call.iter().position(|a| a == "--outfmt").unwrap() + 1;
        call[start..]
            .iter()
            .take_while(|a| !a.starts_with("--"))
            .cloned()
            .collect()
    };
    let calls = mock.calls();
    assert_eq!(outfmt_tokens(&calls[0]), vec!["6", "qseqid"]);
    assert_eq!(outfmt_tokens(&calls[1]), vec!["6"]);
}

#[test]
fn test_sensitivity_flags_reach_command_line() {
    let dir = TempDir::new().unwrap();
    let db = db_path(&dir);
    std::fs::write(&db, b"dmnd").unwrap();
    let mock = Arc::new(MockExecutor::new());
    let diamond = Diamond::new(Settings::new(&db), mock.clone()).unwrap();

    for level in Sensitivity::ALL {
        let params = SearchParams::new()
            .with_sensitivity(level)
            .with_outfmt(OutFormat::Sam);
        diamond.blastx("reads.fa", Path::new("out.sam"), &params).unwrap();

        let call = mock.last_call().unwrap();
        match level.cmd_option() {
            Some(flag) => assert_eq!(call[1], flag),
            None => assert_eq!(call[1], "--query"),
        }
    }
    assert_eq!(mock.call_count(), Sensitivity::ALL.len());
}

#[test]
fn test_invoke_validation_errors_are_argument_errors() {
    let mock = Arc::new(MockExecutor::new());
    let diamond = Diamond::new(Settings::new("d.dmnd"), mock.clone()).unwrap();

    let cases: Vec<(Vec<OptionValue>, Options)> = vec![
        (vec![OptionValue::Bool(true)], Options::new()),
        (
            vec!["in.fa".into()],
            [("unknown".to_string(), OptionValue::from("x"))].into_iter().collect(),
        ),
        (vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()], Options::new()),
        (Vec::new(), Options::new()),
    ];

    for (positional, keywords) in cases {
        let err = diamond.invoke("makedb", positional, keywords).unwrap_err();
        assert!(err.is_argument_error(), "unexpected error: {:?}", err);
    }
    assert_eq!(mock.call_count(), 0);
}
