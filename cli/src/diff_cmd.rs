use std::io::IsTerminal;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use diffmatch_classifier::ClassifierKind;
use diffmatch_cleanup::DiffEngine;
use diffmatch_cleanup::DiffOptions;
use diffmatch_cleanup::render_ansi;
use diffmatch_cleanup::render_plain;
use tracing::info;

use crate::AlgorithmArg;
use crate::ClassifierArg;
use crate::read_file;

#[derive(Debug, Parser)]
pub struct DiffArgs {
    /// Original file
    #[arg(value_name = "OLD")]
    pub old_file: PathBuf,

    /// File compared against the original
    #[arg(value_name = "NEW")]
    pub new_file: PathBuf,

    /// Classifier that decides word, line and paragraph boundaries
    #[arg(long, value_enum, default_value_t = ClassifierArg::Standard)]
    pub classifier: ClassifierArg,

    /// Algorithm for the raw diff
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Myers)]
    pub algorithm: AlgorithmArg,

    /// Stop refining the raw diff after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Diff whole lines instead of characters
    #[arg(long, default_value_t = false)]
    pub check_lines: bool,

    /// Keep the raw edit boundaries instead of aligning them
    #[arg(long, default_value_t = false)]
    pub no_semantic_lossless: bool,

    /// When to colour insertions and deletions
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorArg {
    /// Colour when stdout is a terminal
    #[default]
    Auto,
    Always,
    /// Use `[-deleted-]` / `{+inserted+}` markers
    Never,
}

impl DiffArgs {
    fn options(&self) -> DiffOptions {
        DiffOptions::default()
            .with_algorithm(self.algorithm.into())
            .with_timeout(self.timeout.filter(|&secs| secs > 0).map(Duration::from_secs))
            .with_line_mode(self.check_lines)
            .with_semantic_lossless(!self.no_semantic_lossless)
    }

    fn use_color(&self) -> bool {
        match self.color {
            ColorArg::Always => true,
            ColorArg::Never => false,
            ColorArg::Auto => std::io::stdout().is_terminal(),
        }
    }
}

pub(crate) fn run(args: DiffArgs, out: &mut dyn Write) -> anyhow::Result<()> {
    let old = read_file(&args.old_file)?;
    let new = read_file(&args.new_file)?;

    let kind = ClassifierKind::from(args.classifier);
    let engine = DiffEngine::with_classifier(args.options(), kind.build());
    info!(classifier = %kind, options = ?engine.options(), "diffing files");

    let diffs = engine.diff(&old, &new);
    let rendered = if args.use_color() {
        render_ansi(&diffs)
    } else {
        render_plain(&diffs)
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
