// ============================================================
// Layer 5 — Analysis
// ============================================================
// The counting core of the tool.
//
//   table.rs       — the two-level (question → position → count)
//                    table, its sorted view and the pure merge
//   accumulator.rs — feeds extractions through the generalizer
//                    into a table
//
// Nothing here knows about the corpus file format; extractions
// arrive already parsed from Layer 4.

/// Distribution table, sorted view and merge
pub mod table;

/// Extraction → table accumulation
pub mod accumulator;
