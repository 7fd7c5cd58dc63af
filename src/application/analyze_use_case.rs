// ============================================================
// Layer 2 — AnalyzeUseCase
// ============================================================
// Orchestrates a full distribution run:
//
//   Step 1: Load extractions          (Layer 4 - data)
//   Step 2: Count question positions  (Layer 5 - analysis)
//   Step 3: Rank by occurrences       (Layer 5 - analysis)
//   Step 4: Write the distribution    (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::accumulator::QuestionDistribution;
use crate::analysis::table::total;
use crate::data::{
    generalizer::SlotGeneralizer,
    loader::{QasrlLoader, DEFAULT_MIN_CORRECT},
};
use crate::domain::traits::{ExtractionSource, QuestionGeneralizer};

// ─── Analysis Configuration ──────────────────────────────────────────────────
// Everything a run needs. Serialisable so the effective settings
// can be logged as JSON at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    pub input:       PathBuf,
    pub output:      PathBuf,
    pub min_correct: f64,
    pub top:         usize,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            input:       PathBuf::from("test.jsonl"),
            output:      PathBuf::from("q_dist.json"),
            min_correct: DEFAULT_MIN_CORRECT,
            top:         20,
        }
    }
}

/// What a run produced, for the CLI to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeSummary {
    pub extractions:        usize,
    pub distinct_questions: usize,
    pub total_occurrences:  u64,
}

// ─── AnalyzeUseCase ───────────────────────────────────────────────────────────
pub struct AnalyzeUseCase {
    config: AnalyzeConfig,
}

impl AnalyzeUseCase {
    pub fn new(config: AnalyzeConfig) -> Self {
        Self { config }
    }

    /// Run with the QA-SRL Bank loader and slot generalizer.
    pub fn execute(&self) -> Result<AnalyzeSummary> {
        let loader = QasrlLoader::new(&self.config.input, self.config.min_correct)?;
        self.execute_with(&loader, SlotGeneralizer::new())
    }

    /// Run with any extraction source and generalizer.
    pub fn execute_with<S, G>(&self, source: &S, generalizer: G) -> Result<AnalyzeSummary>
    where
        S: ExtractionSource,
        G: QuestionGeneralizer,
    {
        let cfg = &self.config;

        // ── Step 1: Load extractions ──────────────────────────────────────────
        let extractions = source.load_all()?;
        tracing::info!("Loaded {} extractions", extractions.len());

        // ── Step 2: Count generalized questions per position ──────────────────
        let mut dist = QuestionDistribution::new(generalizer);
        dist.record(&extractions)
            .context("Cannot generalize corpus questions")?;

        // ── Step 3: Rank by total occurrences ─────────────────────────────────
        let sorted = dist.sorted_snapshot();
        for (rank, (question, counts)) in sorted.iter().take(cfg.top).enumerate() {
            tracing::info!(
                "#{:<3} {:>7}  {}  {:?}",
                rank + 1,
                total(counts),
                question,
                counts
            );
        }

        // ── Step 4: Write the distribution ────────────────────────────────────
        tracing::info!("Writing distribution to '{}'", cfg.output.display());
        dist.serialize(&cfg.output)?;

        Ok(AnalyzeSummary {
            extractions:        extractions.len(),
            distinct_questions: dist.len(),
            total_occurrences:  dist.total_occurrences(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::table::DistributionTable;
    use crate::domain::extraction::{ArgumentSlot, Extraction};
    use crate::domain::question::{GeneralizeError, GeneralizedQuestion};
    use crate::domain::traits::Persistable;

    struct FixedSource(Vec<Extraction>);

    impl ExtractionSource for FixedSource {
        fn load_all(&self) -> Result<Vec<Extraction>> {
            Ok(self.0.clone())
        }
    }

    fn identity(question: &str) -> Result<GeneralizedQuestion, GeneralizeError> {
        Ok(GeneralizedQuestion::new(question))
    }

    fn config(dir: &std::path::Path) -> AnalyzeConfig {
        AnalyzeConfig {
            input:  dir.join("in.jsonl"),
            output: dir.join("out.json"),
            ..AnalyzeConfig::default()
        }
    }

    #[test]
    fn test_execute_with_stub_source() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());

        let source = FixedSource(vec![
            Extraction::new("s1", 0, "V")
                .with_arg(ArgumentSlot::new("Obj", "who V", (0, 1)))
                .with_arg(ArgumentSlot::new("Obj2", "what did V", (2, 3))),
            Extraction::new("s2", 0, "V")
                .with_arg(ArgumentSlot::new("Obj", "who V", (0, 1))),
        ]);

        let summary = AnalyzeUseCase::new(cfg.clone())
            .execute_with(&source, identity)
            .unwrap();
        assert_eq!(
            summary,
            AnalyzeSummary { extractions: 2, distinct_questions: 2, total_occurrences: 3 }
        );

        let written = DistributionTable::load(&cfg.output).unwrap();
        assert_eq!(written.count(&GeneralizedQuestion::new("who V"), 0), 2);
        assert_eq!(written.count(&GeneralizedQuestion::new("what did V"), 1), 1);
    }

    #[test]
    fn test_generalization_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());

        let source = FixedSource(vec![
            Extraction::new("s1", 0, "V").with_arg(ArgumentSlot::new("x", "not a question", (0, 1))),
        ]);

        let result = AnalyzeUseCase::new(cfg.clone()).execute_with(&source, SlotGeneralizer::new());
        assert!(result.is_err());
        assert!(!cfg.output.exists());
    }

    #[test]
    fn test_execute_end_to_end_from_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path());

        let line = r#"{"sentenceId":"s1","sentenceTokens":["Alice","slept"],"verbEntries":{"1":{"verbIndex":1,"questionLabels":{"Who slept?":{"questionString":"Who slept?","questionSlots":{"wh":"who","aux":"_","subj":"_","verb":"pastTense","obj":"_","prep":"_","obj2":"_"},"answerJudgments":[{"sourceId":"a","isValid":true,"spans":[[0,1]]}]}}}}}"#;
        std::fs::write(&cfg.input, line).unwrap();

        let summary = AnalyzeUseCase::new(cfg.clone()).execute().unwrap();
        assert_eq!(summary.total_occurrences, 1);

        let text = std::fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(text, r#"{"who V":{"0":1}}"#);
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AnalyzeUseCase::new(config(dir.path())).execute().is_err());
    }
}
