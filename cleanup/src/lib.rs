//! Boundary-aware diffing on top of a pluggable [`TextClassifier`].
//!
//! [`DiffEngine`] takes the raw edit script from the `similar` crate and then
//! slides each isolated edit sideways so that it starts and ends on the most
//! natural boundary it can reach: a blank line beats a line break, which
//! beats the end of a sentence, which beats a word gap. What counts as a
//! word, a gap or a line is decided entirely by the injected classifier.
//!
//! ```
//! use diffmatch_cleanup::DiffEngine;
//! use diffmatch_cleanup::DiffOptions;
//! use diffmatch_cleanup::render_plain;
//! use diffmatch_cleanup::source_text;
//! use diffmatch_cleanup::target_text;
//!
//! let engine = DiffEngine::new(DiffOptions::default());
//! let diffs = engine.diff("The cat sat.", "The cow sat.");
//! assert_eq!(source_text(&diffs), "The cat sat.");
//! assert_eq!(target_text(&diffs), "The cow sat.");
//! println!("{}", render_plain(&diffs));
//! ```
//!
//! [`TextClassifier`]: diffmatch_classifier::TextClassifier

mod diff;
mod engine;
mod lossless;
mod options;
mod render;
mod score;

pub use diff::Diff;
pub use diff::Operation;
pub use diff::source_text;
pub use diff::target_text;
pub use engine::DiffEngine;
pub use lossless::cleanup_semantic_lossless;
pub use options::DiffAlgorithm;
pub use options::DiffOptions;
pub use options::ParseDiffAlgorithmError;
pub use render::render_ansi;
pub use render::render_plain;
pub use score::Boundary;
pub use score::semantic_score;
