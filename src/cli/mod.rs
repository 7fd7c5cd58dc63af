// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap and hands the work to Layer 2 (application).
//
// Two commands are supported:
//   1. `analyze` — corpus → generalized-question distribution file
//   2. `show`    — prints the top rows of a distribution file
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{AnalyzeArgs, Commands, ShowArgs};

use crate::analysis::table::total;

/// The main CLI struct; clap generates the parser from the fields.
#[derive(Parser, Debug)]
#[command(
    name = "qasrl-question-dist",
    version,
    about = "Analyze question distribution in a QA-SRL corpus and store it as JSON."
)]
pub struct Cli {
    /// The subcommand to run (analyze or show)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => run_analyze(args),
            Commands::Show(args)    => run_show(args),
        }
    }
}

/// Handles the `analyze` subcommand.
fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    use crate::application::analyze_use_case::{AnalyzeConfig, AnalyzeUseCase};

    let config: AnalyzeConfig = args.into();
    tracing::info!("Effective config: {}", serde_json::to_string(&config)?);

    let output  = config.output.clone();
    let summary = AnalyzeUseCase::new(config).execute()?;

    println!(
        "{} extractions, {} generalized questions, {} occurrences → {}",
        summary.extractions,
        summary.distinct_questions,
        summary.total_occurrences,
        output.display()
    );
    Ok(())
}

/// Handles the `show` subcommand.
fn run_show(args: ShowArgs) -> Result<()> {
    use crate::application::show_use_case::ShowUseCase;

    let rows = ShowUseCase::new(args.dist).execute(args.top)?;
    for (question, counts) in rows {
        println!("{}\t{}\t{:?}", total(&counts), question, counts);
    }
    Ok(())
}
