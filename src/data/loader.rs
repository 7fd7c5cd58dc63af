// ============================================================
// Layer 4 — QA-SRL Corpus Loader
// ============================================================
// Loads QA-SRL Bank JSON-lines files (one sentence per line)
// and turns every verb entry into an Extraction.
//
// The record structure looks like:
//   Sentence
//     ├── sentenceId, sentenceTokens
//     └── verbEntries: { "<idx>": VerbEntry }
//           └── questionLabels: { "<text>": QuestionLabel }
//                 ├── questionSlots  (wh aux subj verb obj prep obj2)
//                 └── answerJudgments: [{ isValid, spans: [[s, e)] }]
//
// Filtering:
//   A question label is kept when at least `min_correct` of its
//   answer judgments are valid and one valid judgment has a span.
//   The argument is the first span of the first valid judgment.
//
// Argument order:
//   Extraction::sorted_args orders slots by that span, so the
//   positions counted downstream are left-to-right positions in
//   the sentence.
//
// Reference: serde / serde_json crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};
use thiserror::Error;

use crate::domain::extraction::{ArgumentSlot, Extraction};
use crate::domain::traits::ExtractionSource;

/// Default agreement threshold: five of six annotators.
pub const DEFAULT_MIN_CORRECT: f64 = 5.0 / 6.0;

const EMPTY_SLOT: &str = "_";

#[derive(Error, Debug, PartialEq)]
pub enum LoadError {
    #[error("min-correct must be within [0, 1], got {0}")]
    InvalidMinCorrect(f64),

    #[error("span [{start}, {end}) is outside sentence '{sentence_id}' ({len} tokens)")]
    SpanOutOfRange {
        sentence_id: String,
        start:       usize,
        end:         usize,
        len:         usize,
    },
}

// ─── Raw JSON records ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SentenceRecord {
    sentence_id:     String,
    sentence_tokens: Vec<String>,
    #[serde(default)]
    verb_entries:    BTreeMap<String, VerbEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerbEntry {
    verb_index:      usize,
    #[serde(default)]
    question_labels: BTreeMap<String, QuestionLabel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionLabel {
    question_string:  String,
    question_slots:   QuestionSlots,
    #[serde(default)]
    answer_judgments: Vec<AnswerJudgment>,
}

#[derive(Debug, Deserialize)]
struct QuestionSlots {
    wh:   String,
    aux:  String,
    subj: String,
    verb: String,
    obj:  String,
    prep: String,
    obj2: String,
}

impl QuestionSlots {
    /// Seven-slot encoding: `wh aux subj verb obj prep obj2 ?`
    fn encode(&self) -> String {
        let slots = [
            &self.wh, &self.aux, &self.subj, &self.verb, &self.obj, &self.prep, &self.obj2,
        ];
        let mut encoded: Vec<String> = slots.iter().map(|s| encode_slot(s)).collect();
        encoded.push("?".to_string());
        encoded.join(" ")
    }
}

/// One slot as a single token: blanks become "_", inner spaces "-".
fn encode_slot(value: &str) -> String {
    let words: Vec<&str> = value.split_whitespace().collect();
    if words.is_empty() {
        EMPTY_SLOT.to_string()
    } else {
        words.join("-")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerJudgment {
    is_valid: bool,
    #[serde(default)]
    spans:    Vec<(usize, usize)>,
}

// ─── QasrlLoader ──────────────────────────────────────────────────────────────

/// Loads extractions from a QA-SRL Bank JSON-lines file.
/// Implements the ExtractionSource trait from Layer 3.
#[derive(Debug)]
pub struct QasrlLoader {
    /// Path to the .jsonl corpus file
    path: PathBuf,

    /// Minimum fraction of valid judgments for a question to count
    min_correct: f64,
}

impl QasrlLoader {
    pub fn new(path: impl Into<PathBuf>, min_correct: f64) -> Result<Self, LoadError> {
        if !(0.0..=1.0).contains(&min_correct) {
            return Err(LoadError::InvalidMinCorrect(min_correct));
        }
        Ok(Self {
            path: path.into(),
            min_correct,
        })
    }

    /// Read extractions from any line-oriented reader.
    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<Vec<Extraction>> {
        let mut extractions = Vec::new();
        let mut sentences   = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Cannot read line {}", line_no + 1))?;
            if line.trim().is_empty() {
                continue;
            }

            let record: SentenceRecord = serde_json::from_str(&line)
                .with_context(|| format!("Malformed QA-SRL record on line {}", line_no + 1))?;
            extractions.extend(self.extractions_of(&record)?);
            sentences += 1;
        }

        tracing::info!(
            "Read {} sentences, {} extractions (min-correct {:.3})",
            sentences,
            extractions.len(),
            self.min_correct
        );
        Ok(extractions)
    }

    /// One Extraction per verb entry that keeps at least one question.
    fn extractions_of(&self, record: &SentenceRecord) -> Result<Vec<Extraction>, LoadError> {
        let mut verbs: Vec<&VerbEntry> = record.verb_entries.values().collect();
        verbs.sort_by_key(|v| v.verb_index);

        let mut extractions = Vec::new();
        for verb in verbs {
            let predicate = record
                .sentence_tokens
                .get(verb.verb_index)
                .cloned()
                .unwrap_or_default();
            let mut ex = Extraction::new(&record.sentence_id, verb.verb_index, predicate);

            for label in verb.question_labels.values() {
                let Some(span) = self.accepted_span(label) else {
                    tracing::debug!(
                        "Dropping '{}' in sentence '{}': below agreement threshold",
                        label.question_string,
                        record.sentence_id
                    );
                    continue;
                };
                let argument = span_text(record, span)?;
                ex = ex.with_arg(ArgumentSlot::new(argument, label.question_slots.encode(), span));
            }

            if !ex.is_empty() {
                extractions.push(ex);
            }
        }
        Ok(extractions)
    }

    /// The answer span of a label that passes the agreement filter.
    fn accepted_span(&self, label: &QuestionLabel) -> Option<(usize, usize)> {
        let judgments = &label.answer_judgments;
        if judgments.is_empty() {
            return None;
        }

        let valid = judgments.iter().filter(|j| j.is_valid).count();
        if (valid as f64) / (judgments.len() as f64) < self.min_correct {
            return None;
        }

        judgments
            .iter()
            .filter(|j| j.is_valid)
            .find_map(|j| j.spans.first().copied())
    }
}

/// Tokens `[start, end)` of the sentence joined by single spaces.
fn span_text(record: &SentenceRecord, (start, end): (usize, usize)) -> Result<String, LoadError> {
    let len = record.sentence_tokens.len();
    if start >= end || end > len {
        return Err(LoadError::SpanOutOfRange {
            sentence_id: record.sentence_id.clone(),
            start,
            end,
            len,
        });
    }
    Ok(record.sentence_tokens[start..end].join(" "))
}

impl ExtractionSource for QasrlLoader {
    fn load_all(&self) -> Result<Vec<Extraction>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open corpus '{}'", self.path.display()))?;

        tracing::info!("Loading QA-SRL corpus from '{}'", self.path.display());
        self.read_from(BufReader::new(file))
            .with_context(|| format!("Cannot load corpus '{}'", self.path.display()))
    }
}
