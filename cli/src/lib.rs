//! `diffmatch` command-line harness.
//!
//! ## Commands
//!
//! - `diffmatch diff OLD NEW` - print a boundary-aligned diff of two files
//! - `diffmatch classify FILE` - summarise how a classifier sees a file

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use diffmatch_classifier::ClassifierKind;
use diffmatch_cleanup::DiffAlgorithm;
use tracing_subscriber::EnvFilter;

mod classify_cmd;
mod diff_cmd;

pub use classify_cmd::ClassifyArgs;
pub use diff_cmd::ColorArg;
pub use diff_cmd::DiffArgs;

/// Boundary-aware text diffing
#[derive(Debug, Parser)]
#[command(name = "diffmatch", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the diff of two files
    Diff(DiffArgs),

    /// Count character classes and report blank-line edges of a file
    Classify(ClassifyArgs),
}

impl Cli {
    pub fn run(self, out: &mut dyn Write) -> anyhow::Result<()> {
        match self.command {
            Command::Diff(args) => diff_cmd::run(args, out),
            Command::Classify(args) => classify_cmd::run(args, out),
        }
    }
}

/// Text classifier selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ClassifierArg {
    /// Unicode letters, digits and spaces
    #[default]
    #[value(name = "standard", alias = "unicode")]
    Standard,
    /// ASCII only; other chars are treated as symbols
    #[value(name = "ascii")]
    Ascii,
}

impl From<ClassifierArg> for ClassifierKind {
    fn from(arg: ClassifierArg) -> Self {
        match arg {
            ClassifierArg::Standard => ClassifierKind::Standard,
            ClassifierArg::Ascii => ClassifierKind::Ascii,
        }
    }
}

/// Diff algorithm selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AlgorithmArg {
    #[default]
    #[value(name = "myers")]
    Myers,
    #[value(name = "patience")]
    Patience,
    #[value(name = "lcs")]
    Lcs,
}

impl From<AlgorithmArg> for DiffAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Myers => DiffAlgorithm::Myers,
            AlgorithmArg::Patience => DiffAlgorithm::Patience,
            AlgorithmArg::Lcs => DiffAlgorithm::Lcs,
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
