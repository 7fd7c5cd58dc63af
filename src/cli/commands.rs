// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `analyze` and `show`, and all
// their configurable flags.
//
// clap's derive macros generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → PathBuf, f64, usize)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::analyze_use_case::AnalyzeConfig;
use crate::data::loader::DEFAULT_MIN_CORRECT;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count generalized-question positions in a QA-SRL corpus
    Analyze(AnalyzeArgs),

    /// Print the most frequent questions of a distribution file
    Show(ShowArgs),
}

/// All arguments for the `analyze` command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// QA-SRL Bank JSON-lines corpus
    #[arg(long = "in", alias = "input", value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Where to write the distribution JSON
    #[arg(long = "out", alias = "output", value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Minimum fraction of annotators that must judge a
    /// question's answer valid for it to be counted
    #[arg(long, default_value_t = DEFAULT_MIN_CORRECT)]
    pub min_correct: f64,

    /// Number of top-ranked questions to log after counting
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}

/// Convert CLI AnalyzeArgs into the application-layer AnalyzeConfig.
/// The application layer never sees clap types.
impl From<AnalyzeArgs> for AnalyzeConfig {
    fn from(a: AnalyzeArgs) -> Self {
        AnalyzeConfig {
            input:       a.input,
            output:      a.output,
            min_correct: a.min_correct,
            top:         a.top,
        }
    }
}

/// All arguments for the `show` command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Distribution JSON written by `analyze`
    #[arg(long, value_name = "DIST_FILE")]
    pub dist: PathBuf,

    /// Number of rows to print
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}
