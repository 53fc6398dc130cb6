use std::sync::Arc;

use diffmatch_classifier::ClassifierKind;
use diffmatch_classifier::TextClassifier;
use diffmatch_cleanup::Diff;
use diffmatch_cleanup::DiffEngine;
use diffmatch_cleanup::DiffOptions;
use diffmatch_cleanup::render_plain;
use diffmatch_cleanup::source_text;
use diffmatch_cleanup::target_text;
use pretty_assertions::assert_eq;

#[test]
fn inserted_paragraph_stays_between_blank_lines() {
    let old = "Intro.\n\nBody.\n";
    let new = "Intro.\n\nNew para.\n\nBody.\n";
    let diffs = DiffEngine::default().diff(old, new);
    assert_eq!(
        diffs,
        vec![
            Diff::equal("Intro.\n\n"),
            Diff::insert("New para.\n\n"),
            Diff::equal("Body.\n"),
        ]
    );
    assert_eq!(
        render_plain(&diffs),
        "Intro.\n\n{+New para.\n\n+}Body.\n"
    );
}

#[test]
fn crlf_paragraphs_are_recognised() {
    let old = "Intro.\r\n\r\nBody.\r\n";
    let new = "Intro.\r\n\r\nNew para.\r\n\r\nBody.\r\n";
    let diffs = DiffEngine::default().diff(old, new);
    assert_eq!(source_text(&diffs), old);
    assert_eq!(target_text(&diffs), new);
    assert_eq!(
        diffs,
        vec![
            Diff::equal("Intro.\r\n\r\n"),
            Diff::insert("New para.\r\n\r\n"),
            Diff::equal("Body.\r\n"),
        ]
    );
}

/// Treats nothing as structure at all, so every cut scores the same.
struct FlatClassifier;

impl TextClassifier for FlatClassifier {
    fn is_alphanumeric(&self, _c: char) -> bool {
        true
    }

    fn is_whitespace(&self, _c: char) -> bool {
        false
    }

    fn is_linebreak(&self, c: char) -> bool {
        c == '\n' || c == '\r'
    }

    fn begins_with_blank_line(&self, _s: &str) -> bool {
        false
    }

    fn ends_with_blank_line(&self, _s: &str) -> bool {
        false
    }
}

#[test]
fn flat_classifier_pushes_edits_to_the_right() {
    // With no preferred boundary every position ties and the rightmost wins.
    let engine = DiffEngine::with_classifier(DiffOptions::default(), Arc::new(FlatClassifier));
    let diffs = engine.diff("The cat.", "The cow and the cat.");
    assert_eq!(
        diffs,
        vec![
            Diff::equal("The c"),
            Diff::insert("ow and the c"),
            Diff::equal("at."),
        ]
    );
}

#[test]
fn every_bundled_kind_round_trips_inputs() {
    let old = "fn main() {\n    println!(\"héllo\");\n}\n";
    let new = "fn main() {\n\n    println!(\"hello, world\");\n}\n";
    for kind in [ClassifierKind::Standard, ClassifierKind::Ascii] {
        let engine = DiffEngine::with_classifier(DiffOptions::default(), kind.build());
        let diffs = engine.diff(old, new);
        assert_eq!(source_text(&diffs), old, "{kind}");
        assert_eq!(target_text(&diffs), new, "{kind}");
    }
}
