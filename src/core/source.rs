//! Corpus source collaborators.
//!
//! The search core never touches the filesystem directly. It asks a
//! [`CorpusSource`] for a corpus's modification time (the staleness key)
//! and, only when that changes, for its rows.

use crate::core::error::{Result, UxlexError};
use crate::core::types::Row;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Something that can report and load corpora by identity.
///
/// Two calls to [`modified`](CorpusSource::modified) with no write in
/// between must return the same value. A changed value means the rows
/// may have changed.
pub trait CorpusSource: Send + Sync {
    /// Current modification time, or `None` when the corpus does not exist
    fn modified(&self, identity: &str) -> Result<Option<SystemTime>>;

    /// Read every row of the corpus, in source order
    fn load_rows(&self, identity: &str) -> Result<Vec<Row>>;
}

/// CSV files under a data directory, one file per corpus.
///
/// The identity is the file path relative to the data directory
/// (e.g. `styles.csv`, `stacks/react.csv`).
#[derive(Debug, Clone)]
pub struct CsvSource {
    data_dir: PathBuf,
}

impl CsvSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Absolute path of a corpus file
    pub fn path_for(&self, identity: &str) -> PathBuf {
        self.data_dir.join(identity)
    }
}

impl CorpusSource for CsvSource {
    fn modified(&self, identity: &str) -> Result<Option<SystemTime>> {
        let path = self.path_for(identity);
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(Some(meta.modified()?)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn load_rows(&self, identity: &str) -> Result<Vec<Row>> {
        let path = self.path_for(identity);
        if !path.is_file() {
            return Err(UxlexError::SourceNotFound(identity.to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&path)?;
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            // Short rows simply lack trailing fields
            let row: Row = headers
                .iter()
                .zip(record.iter())
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            rows.push(row);
        }

        tracing::debug!(identity, rows = rows.len(), "Loaded corpus rows");
        Ok(rows)
    }
}
