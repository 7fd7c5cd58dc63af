// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to the analysis
// itself:
//
//   dist_store.rs — Distribution file persistence
//                   Writes the distribution table as a flat
//                   JSON object and reads it back for the
//                   `show` command.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// Distribution JSON saving and loading
pub mod dist_store;
