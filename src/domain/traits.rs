// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The distribution accumulator only needs two things from the
// outside world:
//   - a source of extractions
//   - a function turning a raw question into a template
//
// Both are traits so the application layer can wire in the
// QA-SRL Bank implementations while tests wire in stubs.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::extraction::Extraction;
use crate::domain::question::{GeneralizeError, GeneralizedQuestion};

// ─── ExtractionSource ─────────────────────────────────────────────────────────
/// Any component that can produce extractions from a corpus.
///
/// Implementations:
///   - QasrlLoader → reads QA-SRL Bank JSON-lines files
pub trait ExtractionSource {
    /// Load every extraction that passes the source's own filters.
    fn load_all(&self) -> Result<Vec<Extraction>>;
}

// ─── QuestionGeneralizer ──────────────────────────────────────────────────────
/// Maps a raw question string to its generalized template.
///
/// Must be pure: the same input always yields the same output.
///
/// Implementations:
///   - SlotGeneralizer → templates over the seven-slot encoding
///   - any `Fn(&str) -> Result<GeneralizedQuestion, GeneralizeError>`
pub trait QuestionGeneralizer {
    fn generalize(&self, question: &str) -> Result<GeneralizedQuestion, GeneralizeError>;
}

impl<F> QuestionGeneralizer for F
where
    F: Fn(&str) -> Result<GeneralizedQuestion, GeneralizeError>,
{
    fn generalize(&self, question: &str) -> Result<GeneralizedQuestion, GeneralizeError> {
        self(question)
    }
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
///
/// Implementations:
///   - DistributionTable → JSON distribution file
pub trait Persistable: Sized {
    type Error;

    /// Save this component's state to the given path
    fn save(&self, path: &std::path::Path) -> Result<(), Self::Error>;

    /// Load a component's state from the given path.
    fn load(path: &std::path::Path) -> Result<Self, Self::Error>;
}
