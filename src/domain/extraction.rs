// ============================================================
// Layer 3 — Extraction Domain Type
// ============================================================
// Represents one annotated predicate instance from a QA-SRL
// sentence. Each argument slot pairs the answer text with the
// question that elicited it.
//
// Example:
//   Sentence:  "The committee approved the budget"
//   Predicate: "approved" (token 2)
//   Slots:     ("The committee", "who _ _ pastParticiple something _ _ ?")
//              ("the budget",    "what was _ pastParticiple _ _ _ ?")
//
// The order in which slots are counted is owned by the loader:
// `sorted_args` orders slots by answer span (start, then end),
// then by question text so equal spans are still deterministic.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A single (argument, question) pair of an extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSlot {
    /// Answer text as it appears in the sentence
    pub argument: String,

    /// Raw question string in slot encoding
    pub question: String,

    /// Token span of the answer, `[start, end)`
    pub span: (usize, usize),
}

impl ArgumentSlot {
    pub fn new(
        argument: impl Into<String>,
        question: impl Into<String>,
        span:     (usize, usize),
    ) -> Self {
        Self {
            argument: argument.into(),
            question: question.into(),
            span,
        }
    }
}

/// One predicate instance with its argument slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Identifier of the source sentence
    pub sentence_id: String,

    /// Token index of the predicate within the sentence
    pub predicate_index: usize,

    /// Surface form of the predicate
    pub predicate: String,

    /// Slots in the order they were read from the corpus
    pub args: Vec<ArgumentSlot>,
}

impl Extraction {
    pub fn new(
        sentence_id:     impl Into<String>,
        predicate_index: usize,
        predicate:       impl Into<String>,
    ) -> Self {
        Self {
            sentence_id: sentence_id.into(),
            predicate_index,
            predicate: predicate.into(),
            args: Vec::new(),
        }
    }

    /// Append a slot; chaining form used by the loader and tests.
    pub fn with_arg(mut self, slot: ArgumentSlot) -> Self {
        self.args.push(slot);
        self
    }

    /// Returns the slots in canonical order: by span start, span end,
    /// then question text.
    pub fn sorted_args(&self) -> Vec<&ArgumentSlot> {
        let mut sorted: Vec<&ArgumentSlot> = self.args.iter().collect();
        sorted.sort_by(|a, b| {
            a.span
                .cmp(&b.span)
                .then_with(|| a.question.cmp(&b.question))
        });
        sorted
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}
