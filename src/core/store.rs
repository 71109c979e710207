//! Append-only label store (JSON lines)
//!
//! Records are never rewritten. When a word has several records the
//! latest one wins on read.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use crate::types::{CapError, CapResult, LabelRecord};

/// Label store backed by a `.jsonl` file
#[derive(Debug)]
pub struct LabelStore {
    path: PathBuf,
    records: Vec<LabelRecord>,
    /// word -> index of its latest record
    latest: HashMap<String, usize>,
}

impl LabelStore {
    /// Open a store, loading existing records. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> CapResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut store = Self {
            path,
            records: Vec::new(),
            latest: HashMap::new(),
        };

        let content = match std::fs::read_to_string(&store.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %store.path.display(), "label store not found, starting empty");
                return Ok(store);
            }
            Err(source) => {
                return Err(CapError::Read {
                    path: store.path.clone(),
                    source,
                })
            }
        };

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: LabelRecord =
                serde_json::from_str(line).map_err(|source| CapError::StoreLine {
                    path: store.path.clone(),
                    line: i + 1,
                    source,
                })?;
            store.push(record);
        }

        debug!(
            path = %store.path.display(),
            records = store.records.len(),
            words = store.latest.len(),
            "opened label store"
        );
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_labeled(&self, word: &str) -> bool {
        self.latest.contains_key(word)
    }

    /// Latest record for `word`
    pub fn latest(&self, word: &str) -> Option<&LabelRecord> {
        self.latest.get(word).map(|&i| &self.records[i])
    }

    /// All records in file order
    pub fn records(&self) -> &[LabelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append one record to the file and the in-memory view
    pub fn append(&mut self, record: LabelRecord) -> CapResult<()> {
        let line = serde_json::to_string(&record)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| self.write_error(source))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;
        writeln!(file, "{}", line).map_err(|source| self.write_error(source))?;

        if self.is_labeled(&record.word) {
            warn!(word = %record.word, "appending over an existing label");
        }
        self.push(record);
        Ok(())
    }

    fn push(&mut self, record: LabelRecord) {
        self.latest.insert(record.word.clone(), self.records.len());
        self.records.push(record);
    }

    fn write_error(&self, source: std::io::Error) -> CapError {
        CapError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
