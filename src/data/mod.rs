// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw corpus file and the counting core.
//
//   corpus .jsonl
//       │
//       ▼
//   QasrlLoader       → parses sentences, filters questions by
//       │               annotator agreement, builds Extractions
//       ▼
//   SlotGeneralizer   → maps each slot-encoded question to its
//                       generalized template (used by Layer 5)
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads QA-SRL Bank JSON-lines files into Extractions
pub mod loader;

/// Slot-encoded question → generalized template
pub mod generalizer;
