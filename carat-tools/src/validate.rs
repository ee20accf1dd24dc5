//! Argument validation for loosely typed call sites.
//!
//! The typed facade methods need no checking; this module guards the
//! boundary where arguments arrive as [`OptionValue`]s (the method table
//! behind `Diamond::invoke` and the command line). A [`Signature`] declares
//! each parameter's type and default, and [`Signature::bind`] either returns
//! the bound arguments or the first violation, before any command is built.

use crate::args::{OptionValue, Options};
use carat_core::{CaratError, CaratResult};
use indexmap::IndexMap;

/// Declared type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// No check at all
    Any,
    Str,
    Int,
    Float,
    Bool,
    List,
    /// A union such as "int or format name": only checked for not being null
    Generic(&'static str),
}

impl ParamType {
    fn accepts(&self, value: &OptionValue) -> bool {
        match (self, value) {
            (ParamType::Any, _) => true,
            (ParamType::Generic(_), value) => !value.is_null(),
            (ParamType::Str, OptionValue::Str(_))
            | (ParamType::Int, OptionValue::Int(_))
            | (ParamType::Float, OptionValue::Float(_))
            | (ParamType::Bool, OptionValue::Bool(_))
            | (ParamType::List, OptionValue::List(_)) => true,
            _ => false,
        }
    }

    fn expectation(&self) -> String {
        match self {
            ParamType::Any => "any value".to_string(),
            ParamType::Generic(name) => format!("a non-null {}", name),
            ParamType::Str => "an instance of str".to_string(),
            ParamType::Int => "an instance of int".to_string(),
            ParamType::Float => "an instance of float".to_string(),
            ParamType::Bool => "an instance of bool".to_string(),
            ParamType::List => "an instance of list".to_string(),
        }
    }
}

/// Declared default of a parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParamDefault {
    Required,
    /// Defaults to null; an explicit null is then accepted whatever the type
    Null,
    Value(OptionValue),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: &'static str,
    pub ty: ParamType,
    pub default: ParamDefault,
}

impl Param {
    fn check(&self, value: &OptionValue) -> CaratResult<()> {
        if matches!(self.ty, ParamType::Any) {
            return Ok(());
        }
        if self.default == ParamDefault::Null && value.is_null() {
            return Ok(());
        }
        if self.ty.accepts(value) {
            return Ok(());
        }
        tracing::debug!(
            parameter = self.name,
            got = value.type_name(),
            "Rejecting argument"
        );
        Err(CaratError::invalid_argument(self.name, self.ty.expectation()))
    }
}

/// A callable's parameter list
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    name: &'static str,
    params: Vec<Param>,
    var_positional: bool,
    var_keyword: bool,
}

impl Signature {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
            var_positional: false,
            var_keyword: false,
        }
    }

    pub fn required(mut self, name: &'static str, ty: ParamType) -> Self {
        self.params.push(Param {
            name,
            ty,
            default: ParamDefault::Required,
        });
        self
    }

    pub fn optional(mut self, name: &'static str, ty: ParamType, default: ParamDefault) -> Self {
        self.params.push(Param { name, ty, default });
        self
    }

    /// Accept any number of extra positional arguments
    pub fn var_positional(mut self) -> Self {
        self.var_positional = true;
        self
    }

    /// Accept keyword arguments that are not declared
    pub fn var_keyword(mut self) -> Self {
        self.var_keyword = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Match positional and keyword arguments against the declared parameters
    pub fn bind(&self, positional: Vec<OptionValue>, keywords: Options) -> CaratResult<BoundArguments> {
        if positional.len() > self.params.len() && !self.var_positional {
            return Err(CaratError::TooManyPositional {
                expected: self.params.len(),
                got: positional.len(),
            });
        }

        let mut supplied: IndexMap<&'static str, OptionValue> = IndexMap::new();
        let mut extra_positional = Vec::new();
        for (i, value) in positional.into_iter().enumerate() {
            match self.params.get(i) {
                Some(param) => {
                    supplied.insert(param.name, value);
                }
                None => extra_positional.push(value),
            }
        }

        let mut extra_keywords = Options::new();
        for (key, value) in keywords {
            let normalized = key.trim_start_matches('-').replace('-', "_");
            match self.params.iter().find(|p| p.name == normalized) {
                Some(param) => {
                    if supplied.contains_key(param.name) {
                        return Err(CaratError::DuplicateArgument(param.name.to_string()));
                    }
                    supplied.insert(param.name, value);
                }
                None if self.var_keyword => {
                    extra_keywords.insert(key, value);
                }
                None => return Err(CaratError::UnexpectedArgument(key)),
            }
        }

        let mut values = IndexMap::with_capacity(self.params.len());
        for param in &self.params {
            let value = match supplied.shift_remove(param.name) {
                Some(value) => {
                    param.check(&value)?;
                    value
                }
                None => match &param.default {
                    ParamDefault::Required => {
                        return Err(CaratError::MissingArgument(param.name.to_string()))
                    }
                    ParamDefault::Null => OptionValue::Null,
                    ParamDefault::Value(value) => value.clone(),
                },
            };
            values.insert(param.name, value);
        }

        Ok(BoundArguments {
            values,
            extra_positional,
            extra_keywords,
        })
    }
}

/// Arguments that passed validation, keyed by parameter name
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArguments {
    values: IndexMap<&'static str, OptionValue>,
    extra_positional: Vec<OptionValue>,
    extra_keywords: Options,
}

impl BoundArguments {
    /// Value bound to `name`; null for names the signature does not declare
    pub fn get(&self, name: &str) -> &OptionValue {
        static NULL: OptionValue = OptionValue::Null;
        self.values.get(name).unwrap_or(&NULL)
    }

    /// String value bound to `name`, if it is a non-empty string
    pub fn string(&self, name: &str) -> Option<String> {
        self.get(name)
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn extra_positional(&self) -> &[OptionValue] {
        &self.extra_positional
    }

    pub fn extra_keywords(&self) -> &Options {
        &self.extra_keywords
    }

    pub fn into_extra_keywords(self) -> Options {
        self.extra_keywords
    }
}
