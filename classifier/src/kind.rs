use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::AsciiTextClassifier;
use crate::StandardTextClassifier;
use crate::TextClassifier;

/// Selects one of the bundled classifiers by name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifierKind {
    /// [`StandardTextClassifier`]
    #[default]
    Standard,
    /// [`AsciiTextClassifier`]
    Ascii,
}

impl ClassifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Ascii => "ascii",
        }
    }

    /// Build a shareable instance of the selected classifier.
    pub fn build(self) -> Arc<dyn TextClassifier> {
        match self {
            Self::Standard => Arc::new(StandardTextClassifier::new()),
            Self::Ascii => Arc::new(AsciiTextClassifier::new()),
        }
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown text classifier `{input}` (expected `standard` or `ascii`)")]
pub struct ParseClassifierKindError {
    input: String,
}

impl ParseClassifierKindError {
    /// The rejected name, as given.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for ClassifierKind {
    type Err = ParseClassifierKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "unicode" => Ok(Self::Standard),
            "ascii" => Ok(Self::Ascii),
            _ => Err(ParseClassifierKindError {
                input: s.to_string(),
            }),
        }
    }
}
