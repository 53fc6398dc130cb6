use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Algorithm used to compute the raw edit script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffAlgorithm {
    /// Myers O(ND) (default)
    #[default]
    Myers,
    /// Patience diff, anchored on unique common elements
    Patience,
    /// Plain longest-common-subsequence table
    Lcs,
}

impl DiffAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Myers => "myers",
            Self::Patience => "patience",
            Self::Lcs => "lcs",
        }
    }
}

impl fmt::Display for DiffAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<DiffAlgorithm> for similar::Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => similar::Algorithm::Myers,
            DiffAlgorithm::Patience => similar::Algorithm::Patience,
            DiffAlgorithm::Lcs => similar::Algorithm::Lcs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown diff algorithm `{0}` (expected `myers`, `patience` or `lcs`)")]
pub struct ParseDiffAlgorithmError(String);

impl FromStr for DiffAlgorithm {
    type Err = ParseDiffAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "myers" => Ok(Self::Myers),
            "patience" => Ok(Self::Patience),
            "lcs" => Ok(Self::Lcs),
            _ => Err(ParseDiffAlgorithmError(s.to_string())),
        }
    }
}

/// Settings for a [`DiffEngine`](crate::DiffEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    pub algorithm: DiffAlgorithm,

    /// Give up refining the raw diff after this long. The result is still a
    /// valid edit script, just not a minimal one.
    pub timeout: Option<Duration>,

    /// Diff whole lines instead of chars.
    pub line_mode: bool,

    /// Slide edits onto word, line and paragraph boundaries.
    pub semantic_lossless: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::default(),
            timeout: None,
            line_mode: false,
            semantic_lossless: true,
        }
    }
}

impl DiffOptions {
    pub fn with_algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_line_mode(mut self, line_mode: bool) -> Self {
        self.line_mode = line_mode;
        self
    }

    pub fn with_semantic_lossless(mut self, enabled: bool) -> Self {
        self.semantic_lossless = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let options = DiffOptions::default();
        assert_eq!(options.algorithm, DiffAlgorithm::Myers);
        assert_eq!(options.timeout, None);
        assert!(!options.line_mode);
        assert!(options.semantic_lossless);
    }

    #[test]
    fn builder_overrides_each_field() {
        let options = DiffOptions::default()
            .with_algorithm(DiffAlgorithm::Patience)
            .with_timeout(Some(Duration::from_secs(2)))
            .with_line_mode(true)
            .with_semantic_lossless(false);
        assert_eq!(
            options,
            DiffOptions {
                algorithm: DiffAlgorithm::Patience,
                timeout: Some(Duration::from_secs(2)),
                line_mode: true,
                semantic_lossless: false,
            }
        );
    }

    #[test]
    fn algorithm_names() {
        for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
            assert_eq!(algorithm.to_string().parse::<DiffAlgorithm>(), Ok(algorithm));
        }
        assert_eq!("LCS".parse::<DiffAlgorithm>(), Ok(DiffAlgorithm::Lcs));
        assert_eq!(
            "histogram".parse::<DiffAlgorithm>().map_err(|e| e.to_string()),
            Err("unknown diff algorithm `histogram` (expected `myers`, `patience` or `lcs`)".into())
        );
    }
}
