// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Wires the other layers together for each command.
//
// Rules for this layer:
//   - No counting logic here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file format handling (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Corpus → distribution file
pub mod analyze_use_case;

// Distribution file → ranked rows
pub mod show_use_case;
