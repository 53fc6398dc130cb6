use std::sync::Arc;

use diffmatch_classifier::StandardTextClassifier;
use diffmatch_classifier::TextClassifier;
use similar::ChangeTag;
use similar::TextDiff;
use tracing::debug;

use crate::diff::Diff;
use crate::diff::Operation;
use crate::diff::push_run;
use crate::lossless::cleanup_semantic_lossless;
use crate::options::DiffOptions;

/// Computes boundary-aligned edit scripts.
///
/// The classifier is chosen at construction and never changes afterwards.
/// An engine is cheap to clone and can be shared between threads.
#[derive(Clone)]
pub struct DiffEngine {
    options: DiffOptions,
    classifier: Arc<dyn TextClassifier>,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new(DiffOptions::default())
    }
}

impl std::fmt::Debug for DiffEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffEngine")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl DiffEngine {
    /// Engine using [`StandardTextClassifier`].
    pub fn new(options: DiffOptions) -> Self {
        Self::with_classifier(options, Arc::new(StandardTextClassifier::new()))
    }

    pub fn with_classifier(options: DiffOptions, classifier: Arc<dyn TextClassifier>) -> Self {
        Self {
            options,
            classifier,
        }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn classifier(&self) -> &dyn TextClassifier {
        self.classifier.as_ref()
    }

    /// Diff `old` against `new`.
    ///
    /// The returned script never contains empty runs or two adjacent runs
    /// with the same operation, and always reassembles into both inputs.
    pub fn diff(&self, old: &str, new: &str) -> Vec<Diff> {
        let mut diffs = self.raw_diff(old, new);
        let raw_len = diffs.len();
        if self.options.semantic_lossless {
            cleanup_semantic_lossless(self.classifier.as_ref(), &mut diffs);
        }
        debug!(
            algorithm = %self.options.algorithm,
            line_mode = self.options.line_mode,
            old_len = old.len(),
            new_len = new.len(),
            raw_runs = raw_len,
            runs = diffs.len(),
            "computed diff"
        );
        diffs
    }

    fn raw_diff(&self, old: &str, new: &str) -> Vec<Diff> {
        let mut config = TextDiff::configure();
        config.algorithm(self.options.algorithm.into());
        if let Some(timeout) = self.options.timeout {
            config.timeout(timeout);
        }
        let text_diff = if self.options.line_mode {
            config.diff_lines(old, new)
        } else {
            config.diff_chars(old, new)
        };

        let mut diffs = Vec::new();
        for change in text_diff.iter_all_changes() {
            let op = match change.tag() {
                ChangeTag::Equal => Operation::Equal,
                ChangeTag::Delete => Operation::Delete,
                ChangeTag::Insert => Operation::Insert,
            };
            push_run(&mut diffs, op, change.value());
        }
        diffs
    }
}
