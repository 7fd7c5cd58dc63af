// ============================================================
// Layer 5 — Question Distribution Accumulator
// ============================================================
// Counts, for every generalized question, how often it appears
// at each position of an extraction's sorted argument list.
//
// For each extraction:
//   1. take its slots in canonical order (`sorted_args`)
//   2. generalize the question of the slot at position i
//   3. increment table[generalized][i]
//
// Failure semantics of `record`:
//   A generalization error stops the batch at the failing slot.
//   Every increment made before it (including earlier slots of
//   the same extraction) stays in the table; nothing after it
//   is counted. The error is returned to the caller unchanged.
//
// The generalizer is owned by the accumulator, so tests can
// plug in a closure instead of the QA-SRL slot generalizer.

use std::path::Path;

use crate::analysis::table::{DistributionEntry, DistributionTable};
use crate::domain::extraction::Extraction;
use crate::domain::question::GeneralizeError;
use crate::domain::traits::{Persistable, QuestionGeneralizer};
use crate::infra::dist_store::DistStoreError;

pub struct QuestionDistribution<G> {
    generalizer: G,
    table:       DistributionTable,
}

impl<G: QuestionGeneralizer> QuestionDistribution<G> {
    /// Create an empty accumulator that generalizes with `generalizer`.
    pub fn new(generalizer: G) -> Self {
        Self {
            generalizer,
            table: DistributionTable::new(),
        }
    }

    /// Count every (question, position) pair of `extractions`.
    ///
    /// May be called any number of times; counts accumulate.
    pub fn record<'a, I>(&mut self, extractions: I) -> Result<(), GeneralizeError>
    where
        I: IntoIterator<Item = &'a Extraction>,
    {
        let mut seen_extractions = 0usize;
        let mut seen_pairs       = 0usize;

        for ex in extractions {
            for (position, slot) in ex.sorted_args().into_iter().enumerate() {
                let question = self.generalizer.generalize(&slot.question).map_err(|e| {
                    tracing::warn!(
                        "Generalization failed in sentence '{}' at position {}: {}",
                        ex.sentence_id,
                        position,
                        e
                    );
                    e
                })?;
                self.table.increment(&question, position);
                seen_pairs += 1;
            }
            seen_extractions += 1;
        }

        tracing::debug!(
            "Recorded {} extractions ({} argument slots); {} distinct questions so far",
            seen_extractions,
            seen_pairs,
            self.table.len()
        );
        Ok(())
    }

    /// Owned copy of the current table.
    pub fn snapshot(&self) -> DistributionTable {
        self.table.clone()
    }

    /// Current rows ordered by descending total occurrences.
    pub fn sorted_snapshot(&self) -> Vec<DistributionEntry> {
        self.table.sorted()
    }

    /// Persist the (unsorted) table to `destination` as JSON.
    ///
    /// On failure the accumulator is untouched and may be
    /// serialized again to another destination.
    pub fn serialize(&self, destination: &Path) -> Result<(), DistStoreError> {
        self.snapshot().save(destination)
    }

    /// Fold a table accumulated elsewhere (e.g. another corpus shard).
    pub fn merge_from(&mut self, other: &DistributionTable) {
        self.table.merge_from(other);
    }

    /// Read-only view of the table.
    pub fn table(&self) -> &DistributionTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn total_occurrences(&self) -> u64 {
        self.table.total_occurrences()
    }
}
