/// What an edit does to the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Delete,
    Insert,
    Equal,
}

/// One run of an edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    pub op: Operation,
    pub text: String,
}

impl Diff {
    pub fn new(op: Operation, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(Operation::Equal, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(Operation::Delete, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(Operation::Insert, text)
    }
}

/// Reassemble the old text from an edit script.
pub fn source_text(diffs: &[Diff]) -> String {
    diffs
        .iter()
        .filter(|d| d.op != Operation::Insert)
        .map(|d| d.text.as_str())
        .collect()
}

/// Reassemble the new text from an edit script.
pub fn target_text(diffs: &[Diff]) -> String {
    diffs
        .iter()
        .filter(|d| d.op != Operation::Delete)
        .map(|d| d.text.as_str())
        .collect()
}

/// Append `text` to the script, extending the last run when it has the same
/// operation. Empty text is dropped so the script never holds empty runs.
pub(crate) fn push_run(diffs: &mut Vec<Diff>, op: Operation, text: &str) {
    if text.is_empty() {
        return;
    }
    match diffs.last_mut() {
        Some(last) if last.op == op => last.text.push_str(text),
        _ => diffs.push(Diff::new(op, text)),
    }
}

/// Merge adjacent runs with the same operation and drop empty ones.
pub(crate) fn coalesce(diffs: &mut Vec<Diff>) {
    let runs = std::mem::take(diffs);
    for run in runs {
        push_run(diffs, run.op, &run.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_run_coalesces_and_skips_empty() {
        let mut diffs = Vec::new();
        push_run(&mut diffs, Operation::Equal, "T");
        push_run(&mut diffs, Operation::Equal, "he ");
        push_run(&mut diffs, Operation::Delete, "");
        push_run(&mut diffs, Operation::Delete, "c");
        push_run(&mut diffs, Operation::Insert, "d");
        push_run(&mut diffs, Operation::Equal, "og");
        assert_eq!(
            diffs,
            vec![
                Diff::equal("The "),
                Diff::delete("c"),
                Diff::insert("d"),
                Diff::equal("og"),
            ]
        );
    }

    #[test]
    fn coalesce_merges_neighbouring_edits() {
        let mut diffs = vec![
            Diff::insert("b"),
            Diff::equal("a "),
            Diff::delete(" "),
            Diff::delete("a"),
            Diff::equal(""),
            Diff::delete("!"),
        ];
        coalesce(&mut diffs);
        assert_eq!(
            diffs,
            vec![Diff::insert("b"), Diff::equal("a "), Diff::delete(" a!")]
        );
    }

    #[test]
    fn texts_reassemble_both_sides() {
        let diffs = vec![
            Diff::equal("The "),
            Diff::delete("cat"),
            Diff::insert("dog"),
            Diff::equal(" sat."),
        ];
        assert_eq!(source_text(&diffs), "The cat sat.");
        assert_eq!(target_text(&diffs), "The dog sat.");
        assert_eq!(source_text(&[]), "");
    }
}
