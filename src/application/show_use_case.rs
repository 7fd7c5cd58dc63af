// ============================================================
// Layer 2 — ShowUseCase
// ============================================================
// Reloads a distribution file written by `analyze` and returns
// its most frequent generalized questions.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::analysis::table::{DistributionEntry, DistributionTable};
use crate::domain::traits::Persistable;

pub struct ShowUseCase {
    dist_path: PathBuf,
}

impl ShowUseCase {
    pub fn new(dist_path: impl Into<PathBuf>) -> Self {
        Self { dist_path: dist_path.into() }
    }

    /// The `top` rows of the stored distribution, most frequent first.
    pub fn execute(&self, top: usize) -> Result<Vec<DistributionEntry>> {
        let table = DistributionTable::load(&self.dist_path).with_context(|| {
            format!(
                "Cannot read distribution '{}'. Have you run 'analyze' first?",
                self.dist_path.display()
            )
        })?;

        tracing::info!(
            "Distribution has {} generalized questions, {} occurrences",
            table.len(),
            table.total_occurrences()
        );

        let mut rows = table.sorted();
        rows.truncate(top);
        Ok(rows)
    }
}
