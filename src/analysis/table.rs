// ============================================================
// Layer 5 — Distribution Table
// ============================================================
// A two-level frequency table:
//
//   GeneralizedQuestion ──► position ──► count
//
// Questions are kept in first-sight order so that the sorted
// view can break ties deterministically. Positions are kept in a
// BTreeMap so every position map prints in ascending order.
//
// Counting is explicit: a missing (question, position) pair is
// inserted with zero and then incremented. Nothing ever removes
// an entry, so counts only grow.
//
// JSON shape (serde):
//   {"who V": {"0": 120, "1": 4}, "what be V-ed": {"1": 87}}
//
// serde_json writes the integer position keys as strings and
// parses them back from strings, so no manual key conversion
// is needed.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::domain::question::GeneralizedQuestion;

/// Occurrence count per 0-based argument position.
pub type PositionCounts = BTreeMap<usize, u64>;

/// One row of the sorted view.
pub type DistributionEntry = (GeneralizedQuestion, PositionCounts);

#[derive(Debug, Clone, Default)]
pub struct DistributionTable {
    /// Rows in first-sight order
    entries: Vec<DistributionEntry>,

    /// Question → index into `entries`
    index: HashMap<GeneralizedQuestion, usize>,
}

impl DistributionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `question` at `position`.
    pub fn increment(&mut self, question: &GeneralizedQuestion, position: usize) {
        self.add(question, position, 1);
    }

    /// Add `count` occurrences of `question` at `position`,
    /// creating the row and the position with zero first if needed.
    pub fn add(&mut self, question: &GeneralizedQuestion, position: usize, count: u64) {
        let row = match self.index.get(question) {
            Some(&row) => row,
            None => {
                let row = self.entries.len();
                self.entries.push((question.clone(), PositionCounts::new()));
                self.index.insert(question.clone(), row);
                row
            }
        };

        let counts = &mut self.entries[row].1;
        *counts.entry(position).or_insert(0) += count;
    }

    /// Fold every count of `other` into this table.
    /// Questions new to this table are appended in `other`'s order.
    pub fn merge_from(&mut self, other: &DistributionTable) {
        for (question, counts) in other.iter() {
            for (&position, &count) in counts {
                self.add(question, position, count);
            }
        }
    }

    pub fn get(&self, question: &GeneralizedQuestion) -> Option<&PositionCounts> {
        self.index.get(question).map(|&row| &self.entries[row].1)
    }

    /// Count for one cell; absent cells read as zero.
    pub fn count(&self, question: &GeneralizedQuestion, position: usize) -> u64 {
        self.get(question)
            .and_then(|counts| counts.get(&position).copied())
            .unwrap_or(0)
    }

    /// Sum of all position counts of one question.
    pub fn total_for(&self, question: &GeneralizedQuestion) -> u64 {
        self.get(question).map(total).unwrap_or(0)
    }

    /// Sum of every count in the table.
    pub fn total_occurrences(&self) -> u64 {
        self.entries.iter().map(|(_, counts)| total(counts)).sum()
    }

    /// Number of distinct generalized questions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in first-sight order.
    pub fn iter(&self) -> impl Iterator<Item = (&GeneralizedQuestion, &PositionCounts)> {
        self.entries.iter().map(|(q, counts)| (q, counts))
    }

    /// Rows ordered by descending total occurrences.
    ///
    /// `sort_by_key` is stable, so equal totals keep first-sight order.
    pub fn sorted(&self) -> Vec<DistributionEntry> {
        let mut rows = self.entries.clone();
        rows.sort_by_key(|(_, counts)| Reverse(total(counts)));
        rows
    }
}

/// Sum of a position map; this is the ranking key of the sorted view.
pub fn total(counts: &PositionCounts) -> u64 {
    counts.values().sum()
}

/// Pure merge of two tables: every cell of the result is the sum of
/// the matching cells of `a` and `b`.
pub fn merge(a: &DistributionTable, b: &DistributionTable) -> DistributionTable {
    let mut merged = a.clone();
    merged.merge_from(b);
    merged
}

// Equality is per-cell count equality; first-sight order is ignored.
impl PartialEq for DistributionTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(question, counts)| other.get(question) == Some(counts))
    }
}

impl Eq for DistributionTable {}

impl Serialize for DistributionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (question, counts) in &self.entries {
            map.serialize_entry(question, counts)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DistributionTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = DistributionTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of generalized questions to position counts")
    }

    // Reads rows in file order so first-sight order survives a reload.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = DistributionTable::new();
        while let Some((question, counts)) =
            access.next_entry::<GeneralizedQuestion, PositionCounts>()?
        {
            for (position, count) in counts {
                table.add(&question, position, count);
            }
        }
        Ok(table)
    }
}
