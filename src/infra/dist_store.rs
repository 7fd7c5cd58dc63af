// ============================================================
// Layer 6 — Distribution Store
// ============================================================
// Writes and reads the distribution file.
//
// What gets written:
//   One JSON object. Outer keys are generalized questions in
//   first-sight order; values map stringified positions to
//   counts:
//
//     {"who V": {"0": 120, "1": 4}, "what be V-ed": {"1": 87}}
//
// Writes truncate any existing file. The writer is buffered and
// flushed explicitly so a failing write is reported instead of
// being lost when the buffer is dropped.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::analysis::table::DistributionTable;
use crate::domain::traits::Persistable;

#[derive(Error, Debug)]
pub enum DistStoreError {
    #[error("cannot access distribution file '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("invalid distribution JSON in '{}': {source}", .path.display())]
    Json {
        path:   PathBuf,
        source: serde_json::Error,
    },
}

impl DistStoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), source }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        // serde_json wraps I/O failures of the underlying writer too
        if source.is_io() {
            return Self::io(path, source.into());
        }
        Self::Json { path: path.to_path_buf(), source }
    }
}

/// Write `table` to `path`, replacing any existing content.
pub fn write_distribution(table: &DistributionTable, path: &Path) -> Result<(), DistStoreError> {
    let file = File::create(path).map_err(|e| DistStoreError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, table).map_err(|e| DistStoreError::json(path, e))?;
    writer.flush().map_err(|e| DistStoreError::io(path, e))?;

    tracing::debug!(
        "Wrote {} generalized questions to '{}'",
        table.len(),
        path.display()
    );
    Ok(())
}

/// Read a distribution file written by [`write_distribution`].
pub fn read_distribution(path: &Path) -> Result<DistributionTable, DistStoreError> {
    let file = File::open(path).map_err(|e| DistStoreError::io(path, e))?;
    let table: DistributionTable = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| DistStoreError::json(path, e))?;

    tracing::debug!(
        "Read {} generalized questions from '{}'",
        table.len(),
        path.display()
    );
    Ok(table)
}

impl Persistable for DistributionTable {
    type Error = DistStoreError;

    fn save(&self, path: &Path) -> Result<(), DistStoreError> {
        write_distribution(self, path)
    }

    fn load(path: &Path) -> Result<Self, DistStoreError> {
        read_distribution(path)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::GeneralizedQuestion;

    fn sample() -> DistributionTable {
        let mut t = DistributionTable::new();
        t.add(&GeneralizedQuestion::new("who V"), 0, 2);
        t.add(&GeneralizedQuestion::new("what did V"), 1, 1);
        t
    }

    #[test]
    fn test_save_then_load_matches() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist.json");

        let table = sample();
        table.save(&path).unwrap();
        let loaded = DistributionTable::load(&path).unwrap();

        assert_eq!(loaded, table);
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist.json");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        sample().save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"{"who V":{"0":2},"what did V":{"1":1}}"#);
    }

    #[test]
    fn test_save_into_missing_directory_is_io_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("dist.json");

        let err = sample().save(&path).unwrap_err();
        assert!(matches!(err, DistStoreError::Io { .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DistributionTable::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DistStoreError::Io { .. }));
    }

    #[test]
    fn test_load_garbage_is_json_error() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = DistributionTable::load(&path).unwrap_err();
        assert!(matches!(err, DistStoreError::Json { .. }));
    }
}
