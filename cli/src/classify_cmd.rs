use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use diffmatch_classifier::ClassifierKind;
use diffmatch_classifier::TextClassifier;

use crate::ClassifierArg;
use crate::read_file;

#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// File to classify
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Classifier to apply
    #[arg(long, value_enum, default_value_t = ClassifierArg::Standard)]
    pub classifier: ClassifierArg,
}

/// Per-class counts for one text. Classes overlap, so they need not sum to
/// `chars`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ClassSummary {
    pub chars: usize,
    pub alphanumeric: usize,
    pub whitespace: usize,
    pub linebreaks: usize,
    pub begins_with_blank_line: bool,
    pub ends_with_blank_line: bool,
}

impl ClassSummary {
    pub(crate) fn of(classifier: &dyn TextClassifier, text: &str) -> Self {
        let mut summary = Self {
            begins_with_blank_line: classifier.begins_with_blank_line(text),
            ends_with_blank_line: classifier.ends_with_blank_line(text),
            ..Self::default()
        };
        for c in text.chars() {
            summary.chars += 1;
            summary.alphanumeric += usize::from(classifier.is_alphanumeric(c));
            summary.whitespace += usize::from(classifier.is_whitespace(c));
            summary.linebreaks += usize::from(classifier.is_linebreak(c));
        }
        summary
    }

    fn write_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "chars: {}", self.chars)?;
        writeln!(out, "alphanumeric: {}", self.alphanumeric)?;
        writeln!(out, "whitespace: {}", self.whitespace)?;
        writeln!(out, "linebreaks: {}", self.linebreaks)?;
        writeln!(out, "begins_with_blank_line: {}", self.begins_with_blank_line)?;
        writeln!(out, "ends_with_blank_line: {}", self.ends_with_blank_line)
    }
}

pub(crate) fn run(args: ClassifyArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let text = read_file(&args.file)?;
    let classifier = ClassifierKind::from(args.classifier).build();
    ClassSummary::of(classifier.as_ref(), &text).write_to(out)?;
    Ok(())
}
