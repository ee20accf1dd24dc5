//! Closed option sets understood by diamond: search sensitivity and output format

use crate::args::OptionValue;
use carat_core::{CaratError, CaratResult};
use serde::{Deserialize, Serialize};

/// Search sensitivity, ordered from fastest to most sensitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sensitivity {
    Fast,
    MidSensitive,
    /// diamond's own default mode; emits no flag
    #[default]
    Default,
    Sensitive,
    MoreSensitive,
    VerySensitive,
    UltraSensitive,
}

impl Sensitivity {
    pub const ALL: [Sensitivity; 7] = [
        Sensitivity::Fast,
        Sensitivity::MidSensitive,
        Sensitivity::Default,
        Sensitivity::Sensitive,
        Sensitivity::MoreSensitive,
        Sensitivity::VerySensitive,
        Sensitivity::UltraSensitive,
    ];

    /// Kebab-cased name, matching diamond's flag spelling
    pub fn name(&self) -> &'static str {
        match self {
            Sensitivity::Fast => "fast",
            Sensitivity::MidSensitive => "mid-sensitive",
            Sensitivity::Default => "default",
            Sensitivity::Sensitive => "sensitive",
            Sensitivity::MoreSensitive => "more-sensitive",
            Sensitivity::VerySensitive => "very-sensitive",
            Sensitivity::UltraSensitive => "ultra-sensitive",
        }
    }

    /// Position of this level in [`Sensitivity::ALL`]
    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// The command-line flag selecting this level, `None` for the default mode
    pub fn cmd_option(&self) -> Option<String> {
        match self {
            Sensitivity::Default => None,
            other => Some(format!("--{}", other.name())),
        }
    }
}

impl std::fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i64> for Sensitivity {
    type Error = CaratError;

    fn try_from(code: i64) -> CaratResult<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Sensitivity::ALL.get(i).copied())
            .ok_or_else(|| CaratError::InvalidEnumValue {
                kind: "sensitivity",
                value: code.to_string(),
            })
    }
}

impl std::str::FromStr for Sensitivity {
    type Err = CaratError;

    fn from_str(s: &str) -> CaratResult<Self> {
        if let Ok(code) = s.trim().parse::<i64>() {
            return Sensitivity::try_from(code);
        }
        let normalized = s.trim().to_lowercase().replace('_', "-");
        let normalized = normalized.trim_start_matches("--");
        Sensitivity::ALL
            .into_iter()
            .find(|level| level.name() == normalized)
            .ok_or_else(|| CaratError::InvalidEnumValue {
                kind: "sensitivity",
                value: s.to_string(),
            })
    }
}

impl TryFrom<&OptionValue> for Sensitivity {
    type Error = CaratError;

    fn try_from(value: &OptionValue) -> CaratResult<Self> {
        match value {
            OptionValue::Null => Ok(Sensitivity::Default),
            OptionValue::Int(code) => Sensitivity::try_from(*code),
            OptionValue::Str(name) => name.parse(),
            other => Err(CaratError::InvalidEnumValue {
                kind: "sensitivity",
                value: other.to_string(),
            }),
        }
    }
}

/// Output encodings, carrying diamond's numeric `--outfmt` code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutFormat {
    BlastPairwise,
    BlastXml,
    #[default]
    BlastTabular,
    Daa,
    Sam,
}

impl OutFormat {
    pub const ALL: [OutFormat; 5] = [
        OutFormat::BlastPairwise,
        OutFormat::BlastXml,
        OutFormat::BlastTabular,
        OutFormat::Daa,
        OutFormat::Sam,
    ];

    pub fn code(&self) -> i64 {
        match self {
            OutFormat::BlastPairwise => 0,
            OutFormat::BlastXml => 5,
            OutFormat::BlastTabular => 6,
            OutFormat::Daa => 100,
            OutFormat::Sam => 101,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutFormat::BlastPairwise => "blast-pairwise",
            OutFormat::BlastXml => "blast-xml",
            OutFormat::BlastTabular => "blast-tabular",
            OutFormat::Daa => "daa",
            OutFormat::Sam => "sam",
        }
    }

    /// Only the tabular format accepts extra column names
    pub fn supports_columns(&self) -> bool {
        matches!(self, OutFormat::BlastTabular)
    }
}

impl std::fmt::Display for OutFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i64> for OutFormat {
    type Error = CaratError;

    fn try_from(code: i64) -> CaratResult<Self> {
        OutFormat::ALL
            .into_iter()
            .find(|format| format.code() == code)
            .ok_or_else(|| CaratError::InvalidEnumValue {
                kind: "output format",
                value: code.to_string(),
            })
    }
}

impl std::str::FromStr for OutFormat {
    type Err = CaratError;

    fn from_str(s: &str) -> CaratResult<Self> {
        if let Ok(code) = s.trim().parse::<i64>() {
            return OutFormat::try_from(code);
        }
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "blast-pairwise" | "pairwise" => Ok(OutFormat::BlastPairwise),
            "blast-xml" | "xml" => Ok(OutFormat::BlastXml),
            "blast-tabular" | "tabular" | "tab" => Ok(OutFormat::BlastTabular),
            "daa" => Ok(OutFormat::Daa),
            "sam" => Ok(OutFormat::Sam),
            _ => Err(CaratError::InvalidEnumValue {
                kind: "output format",
                value: s.to_string(),
            }),
        }
    }
}

/// What `--outfmt` receives: the bare code, or the code followed by column names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatValue {
    Code(i64),
    Columns(i64, Vec<String>),
}

impl FormatValue {
    pub fn tokens(&self) -> Vec<String> {
        match self {
            FormatValue::Code(code) => vec![code.to_string()],
            FormatValue::Columns(code, columns) => std::iter::once(code.to_string())
                .chain(columns.iter().cloned())
                .collect(),
        }
    }
}

impl From<FormatValue> for OptionValue {
    fn from(value: FormatValue) -> Self {
        match value {
            FormatValue::Code(code) => OptionValue::Int(code),
            FormatValue::Columns(code, columns) => OptionValue::List(
                std::iter::once(OptionValue::Int(code))
                    .chain(columns.into_iter().map(OptionValue::Str))
                    .collect(),
            ),
        }
    }
}

/// A per-call output format: an immutable kind plus the caller's extra columns.
///
/// Each search owns its own value, so attaching columns for one call never
/// leaks into another.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputFormat {
    kind: OutFormat,
    #[serde(default)]
    extra_columns: Vec<String>,
}

impl OutputFormat {
    pub fn new(kind: OutFormat) -> Self {
        Self {
            kind,
            extra_columns: Vec::new(),
        }
    }

    pub fn tabular() -> Self {
        Self::new(OutFormat::BlastTabular)
    }

    pub fn kind(&self) -> OutFormat {
        self.kind
    }

    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    /// Append column names; ignored unless the kind is tabular
    pub fn with_extra_option<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.kind.supports_columns() {
            self.extra_columns.extend(columns.into_iter().map(Into::into));
        } else {
            tracing::debug!(format = %self.kind, "Ignoring extra columns for non-tabular format");
        }
        self
    }

    /// Drop any attached columns
    pub fn reset(mut self) -> Self {
        self.extra_columns.clear();
        self
    }

    pub fn value(&self) -> FormatValue {
        if self.extra_columns.is_empty() {
            FormatValue::Code(self.kind.code())
        } else {
            FormatValue::Columns(self.kind.code(), self.extra_columns.clone())
        }
    }
}

impl From<OutFormat> for OutputFormat {
    fn from(kind: OutFormat) -> Self {
        Self::new(kind)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CaratError;

    /// Parses `6`, `tabular`, or `6 qseqid sseqid` (commas also separate)
    fn from_str(s: &str) -> CaratResult<Self> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let kind: OutFormat = parts
            .next()
            .ok_or_else(|| CaratError::InvalidEnumValue {
                kind: "output format",
                value: s.to_string(),
            })?
            .parse()?;
        Ok(OutputFormat::new(kind).with_extra_option(parts))
    }
}

impl TryFrom<&OptionValue> for OutputFormat {
    type Error = CaratError;

    fn try_from(value: &OptionValue) -> CaratResult<Self> {
        match value {
            OptionValue::Null => Ok(OutputFormat::default()),
            OptionValue::Int(code) => Ok(OutputFormat::new(OutFormat::try_from(*code)?)),
            OptionValue::Str(raw) => raw.parse(),
            OptionValue::List(items) if !items.is_empty() => {
                let kind = match &items[0] {
                    OptionValue::Int(code) => OutFormat::try_from(*code)?,
                    OptionValue::Str(name) => name.parse()?,
                    other => {
                        return Err(CaratError::InvalidEnumValue {
                            kind: "output format",
                            value: other.to_string(),
                        })
                    }
                };
                Ok(OutputFormat::new(kind)
                    .with_extra_option(items[1..].iter().map(|item| item.to_string())))
            }
            other => Err(CaratError::InvalidEnumValue {
                kind: "output format",
                value: other.to_string(),
            }),
        }
    }
}
