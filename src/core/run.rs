//! Bulk labeling run over a sequence index

use serde::Serialize;
use tracing::{debug, info};
use crate::core::classifier::CapClassifier;
use crate::core::store::LabelStore;
use crate::types::{CapResult, LabelRecord, WordSequence};

/// Whether records are persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    /// Classify and report only
    #[default]
    DryRun,
    /// Append records to the label store
    Apply,
}

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub mode: RunMode,
    /// Re-label words that already have a record
    pub force: bool,
    /// Only process this word
    pub word_filter: Option<String>,
}

/// Counters and generated records of one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub mode: RunMode,
    pub examined: usize,
    pub skipped: usize,
    pub classified: usize,
    pub unclassifiable: usize,
    pub written: usize,
    pub records: Vec<LabelRecord>,
}

/// Labeling run
#[derive(Debug, Default)]
pub struct LabelRun {
    config: RunConfig,
    classifier: CapClassifier,
}

impl LabelRun {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            classifier: CapClassifier::new(),
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Classify every selected word; append records in `Apply` mode
    pub fn execute(&self, index: &[WordSequence], store: &mut LabelStore) -> CapResult<RunSummary> {
        let mut summary = RunSummary {
            mode: self.config.mode,
            ..Default::default()
        };

        for entry in index.iter().filter(|w| self.selected(&w.word)) {
            summary.examined += 1;

            if !self.config.force && store.is_labeled(&entry.word) {
                debug!(word = %entry.word, "already labeled, skipping");
                summary.skipped += 1;
                continue;
            }

            let result = self.classifier.classify_word(entry);
            let record = LabelRecord::from_result(&entry.word, &result);
            debug!(word = %entry.word, reason = result.reason.code(), "labeled");

            if record.is_classified() {
                summary.classified += 1;
            } else {
                summary.unclassifiable += 1;
            }

            if self.config.mode == RunMode::Apply {
                store.append(record.clone())?;
                summary.written += 1;
            }
            summary.records.push(record);
        }

        info!(
            mode = ?summary.mode,
            examined = summary.examined,
            skipped = summary.skipped,
            classified = summary.classified,
            unclassifiable = summary.unclassifiable,
            written = summary.written,
            "labeling run complete"
        );
        Ok(summary)
    }

    fn selected(&self, word: &str) -> bool {
        self.config.word_filter.as_deref().map_or(true, |w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawSequenceEntry;

    fn not_circular(word: &str) -> WordSequence {
        WordSequence {
            word: word.to_string(),
            sequence: vec![RawSequenceEntry {
                beat: 1,
                end_pos: Some("alpha1".to_string()),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LabelStore::open(dir.path().join("labels.jsonl")).unwrap();
        let index = vec![not_circular("A"), not_circular("B")];

        let summary = LabelRun::new(RunConfig::default()).execute(&index, &mut store).unwrap();
        assert_eq!(summary.examined, 2);
        assert_eq!(summary.unclassifiable, 2);
        assert_eq!(summary.written, 0);
        assert_eq!(summary.records.len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_apply_skips_labeled_unless_forced() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LabelStore::open(dir.path().join("labels.jsonl")).unwrap();
        let index = vec![not_circular("A")];
        let apply = RunConfig {
            mode: RunMode::Apply,
            ..Default::default()
        };

        let first = LabelRun::new(apply.clone()).execute(&index, &mut store).unwrap();
        assert_eq!(first.written, 1);

        let second = LabelRun::new(apply.clone()).execute(&index, &mut store).unwrap();
        assert_eq!(second.skipped, 1);
        assert_eq!(second.written, 0);

        let forced = RunConfig { force: true, ..apply };
        let third = LabelRun::new(forced).execute(&index, &mut store).unwrap();
        assert_eq!(third.written, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_word_filter() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = LabelStore::open(dir.path().join("labels.jsonl")).unwrap();
        let index = vec![not_circular("A"), not_circular("B")];
        let config = RunConfig {
            word_filter: Some("B".to_string()),
            ..Default::default()
        };

        let summary = LabelRun::new(config).execute(&index, &mut store).unwrap();
        assert_eq!(summary.examined, 1);
        assert_eq!(summary.records[0].word, "B");
    }
}
