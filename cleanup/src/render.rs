use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::diff::Diff;
use crate::diff::Operation;

/// Render with `[-deleted-]` and `{+inserted+}` markers.
pub fn render_plain(diffs: &[Diff]) -> String {
    let mut out = String::new();
    for diff in diffs {
        match diff.op {
            Operation::Equal => out.push_str(&diff.text),
            Operation::Delete => {
                let _ = write!(out, "[-{}-]", diff.text);
            }
            Operation::Insert => {
                let _ = write!(out, "{{+{}+}}", diff.text);
            }
        }
    }
    out
}

/// Render for a terminal: deletions in red, insertions in green.
pub fn render_ansi(diffs: &[Diff]) -> String {
    let mut out = String::new();
    for diff in diffs {
        match diff.op {
            Operation::Equal => out.push_str(&diff.text),
            Operation::Delete => {
                let _ = write!(out, "{}", diff.text.red());
            }
            Operation::Insert => {
                let _ = write!(out, "{}", diff.text.green());
            }
        }
    }
    out
}
