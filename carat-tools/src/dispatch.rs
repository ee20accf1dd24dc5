//! Name-based dispatch over the facade.
//!
//! Each modeled subcommand is registered with its declared [`Signature`];
//! arguments are validated and converted before the typed method runs.
//! Unregistered names fall through to [`Diamond::run_subcommand`].

use crate::args::{OptionValue, Options};
use crate::diamond::{Diamond, MakeDbOptions, SearchMode, SearchParams};
use crate::types::{OutputFormat, Sensitivity};
use crate::validate::{BoundArguments, ParamDefault, ParamType, Signature};
use carat_core::CaratResult;
use std::path::{Path, PathBuf};

struct Method {
    name: &'static str,
    signature: fn() -> Signature,
    call: fn(&Diamond, BoundArguments) -> CaratResult<i32>,
}

const METHODS: &[Method] = &[
    Method {
        name: "makedb",
        signature: makedb_signature,
        call: call_makedb,
    },
    Method {
        name: "blastp",
        signature: blastp_signature,
        call: call_blastp,
    },
    Method {
        name: "blastx",
        signature: blastx_signature,
        call: call_blastx,
    },
    Method {
        name: "dbinfo",
        signature: dbinfo_signature,
        call: call_dbinfo,
    },
];

/// Names with a registered signature
pub fn registered_methods() -> impl Iterator<Item = &'static str> {
    METHODS.iter().map(|m| m.name)
}

/// Declared signature of a registered method
pub fn signature(method: &str) -> Option<Signature> {
    METHODS
        .iter()
        .find(|m| m.name == method)
        .map(|m| (m.signature)())
}

pub(crate) fn invoke(
    diamond: &Diamond,
    method: &str,
    positional: Vec<OptionValue>,
    keywords: Options,
) -> CaratResult<i32> {
    match METHODS.iter().find(|m| m.name == method) {
        Some(registered) => {
            let bound = (registered.signature)().bind(positional, keywords)?;
            (registered.call)(diamond, bound)
        }
        None => {
            tracing::debug!(method, "Not a registered method, passing through");
            let bound = Signature::new("subcommand")
                .var_positional()
                .var_keyword()
                .bind(positional, keywords)?;
            // Only non-empty string positionals become tokens
            let tokens: Vec<String> = bound
                .extra_positional()
                .iter()
                .filter_map(|value| value.as_str().map(str::to_string))
                .collect();
            diamond.run_subcommand(method, tokens, bound.into_extra_keywords())
        }
    }
}

fn makedb_signature() -> Signature {
    Signature::new("makedb")
        .required("input_file", ParamType::Str)
        .optional("taxonmap", ParamType::Str, ParamDefault::Null)
        .optional("taxonnodes", ParamType::Str, ParamDefault::Null)
        .optional("taxonnames", ParamType::Str, ParamDefault::Null)
}

fn search_signature(name: &'static str) -> Signature {
    Signature::new(name)
        .required("query", ParamType::Str)
        .required("out", ParamType::Str)
        .optional(
            "outfmt",
            ParamType::Generic("output format"),
            ParamDefault::Value(OptionValue::Int(6)),
        )
        .optional(
            "sensitivity",
            ParamType::Generic("sensitivity"),
            ParamDefault::Value(OptionValue::Int(2)),
        )
        .var_keyword()
}

fn blastp_signature() -> Signature {
    search_signature("blastp")
}

fn blastx_signature() -> Signature {
    search_signature("blastx")
}

fn dbinfo_signature() -> Signature {
    Signature::new("dbinfo")
}

fn optional_path(bound: &BoundArguments, name: &str) -> Option<PathBuf> {
    bound.string(name).map(PathBuf::from)
}

fn call_makedb(diamond: &Diamond, bound: BoundArguments) -> CaratResult<i32> {
    let input = bound.string("input_file").unwrap_or_default();
    let options = MakeDbOptions {
        taxonmap: optional_path(&bound, "taxonmap"),
        taxonnodes: optional_path(&bound, "taxonnodes"),
        taxonnames: optional_path(&bound, "taxonnames"),
    };
    diamond.makedb(input, &options)
}

fn call_search(diamond: &Diamond, mode: SearchMode, bound: BoundArguments) -> CaratResult<i32> {
    let query = bound.string("query").unwrap_or_default();
    let out = bound.string("out").unwrap_or_default();
    let params = SearchParams {
        outfmt: OutputFormat::try_from(bound.get("outfmt"))?,
        sensitivity: Sensitivity::try_from(bound.get("sensitivity"))?,
        extra: bound.into_extra_keywords(),
    };
    diamond.search(mode, Path::new(&query), Path::new(&out), &params)
}

fn call_blastp(diamond: &Diamond, bound: BoundArguments) -> CaratResult<i32> {
    call_search(diamond, SearchMode::Blastp, bound)
}

fn call_blastx(diamond: &Diamond, bound: BoundArguments) -> CaratResult<i32> {
    call_search(diamond, SearchMode::Blastx, bound)
}

fn call_dbinfo(diamond: &Diamond, _bound: BoundArguments) -> CaratResult<i32> {
    diamond.dbinfo()
}
