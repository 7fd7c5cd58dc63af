// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing what the analysis
// works on:
//
//   extraction.rs — one annotated predicate instance and its
//                   (argument, question) slots
//   question.rs   — the generalized question key and the error
//                   raised when a question cannot be generalized
//   traits.rs     — the collaborator seams (corpus source and
//                   question generalizer)
//
// Rules for this layer:
//   - NO file I/O
//   - NO JSON-lines parsing (that's Layer 4)
//   - NO counting (that's Layer 5)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// An annotated predicate with its argument/question slots
pub mod extraction;

// The generalized question template used as a distribution key
pub mod question;

// Core abstractions (traits) that other layers implement
pub mod traits;
