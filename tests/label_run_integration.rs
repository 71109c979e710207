//! Integration tests for index loading, labeling runs and the label store

use capsym::core::{load_index, LabelRun, LabelStore, RunConfig, RunMode};
use capsym::types::{CapError, CapType, WordSequence};
use serde_json::json;
use std::path::Path;

fn beat(n: u32, letter: &str, end: &str, blue: [&str; 3], red: [&str; 3]) -> serde_json::Value {
    json!({
        "beat": n,
        "letter": letter,
        "end_pos": end,
        "blue_attributes": {"start_loc": blue[0], "end_loc": blue[1], "motion_type": blue[2]},
        "red_attributes": {"start_loc": red[0], "end_loc": red[1], "motion_type": red[2]},
    })
}

/// Two words: one half-turn rotation, one that never returns home
fn write_index(path: &Path) {
    let index = json!([
        {
            "word": "ROT",
            "sequence": [
                {"beat": 0, "end_pos": "alpha1"},
                beat(1, "R", "beta5", ["n", "e", "pro"], ["s", "sw", "anti"]),
                beat(2, "O", "alpha1", ["s", "w", "pro"], ["n", "ne", "anti"]),
            ]
        },
        {
            "word": "OPEN",
            "sequence": [
                {"beat": 0, "end_pos": "alpha1"},
                beat(1, "O", "beta5", ["n", "e", "pro"], ["s", "sw", "anti"]),
                beat(2, "P", "gamma3", ["s", "w", "pro"], ["n", "ne", "anti"]),
            ]
        }
    ]);
    std::fs::write(path, serde_json::to_string_pretty(&index).unwrap()).unwrap();
}

fn setup() -> (tempfile::TempDir, Vec<WordSequence>) {
    let dir = tempfile::tempdir().unwrap();
    let index_path = dir.path().join("sequence_index.json");
    write_index(&index_path);
    let index = load_index(&index_path).unwrap();
    (dir, index)
}

#[test]
fn test_index_loads_all_words() {
    let (_dir, index) = setup();
    assert_eq!(index.len(), 2);
    assert_eq!(index[0].word, "ROT");
    assert_eq!(index[0].sequence.len(), 3);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let (dir, index) = setup();
    let store_path = dir.path().join("cap_labels.jsonl");
    let mut store = LabelStore::open(&store_path).unwrap();

    let summary = LabelRun::new(RunConfig::default()).execute(&index, &mut store).unwrap();

    assert_eq!(summary.mode, RunMode::DryRun);
    assert_eq!(summary.examined, 2);
    assert_eq!(summary.classified, 1);
    assert_eq!(summary.unclassifiable, 1);
    assert_eq!(summary.written, 0);
    assert!(!store_path.exists());
}

#[test]
fn test_apply_persists_records() {
    let (dir, index) = setup();
    let store_path = dir.path().join("cap_labels.jsonl");
    let mut store = LabelStore::open(&store_path).unwrap();
    let config = RunConfig {
        mode: RunMode::Apply,
        ..Default::default()
    };

    let summary = LabelRun::new(config).execute(&index, &mut store).unwrap();
    assert_eq!(summary.written, 2);

    let reopened = LabelStore::open(&store_path).unwrap();
    let rot = reopened.latest("ROT").unwrap();
    assert_eq!(rot.designations.len(), 1);
    assert_eq!(rot.designations[0].cap_type, CapType::Rotated);
    assert_eq!(rot.designations[0].components, vec!["rotated"]);
    assert!(rot.needs_verification);
    assert!(rot.auto_generated);
    assert!(rot.note.contains("rotation=halved"));

    let open = reopened.latest("OPEN").unwrap();
    assert!(open.designations.is_empty());
    assert!(open.note.contains("C002_NOT_CIRCULAR"));
}

#[test]
fn test_rerun_skips_then_force_relabels_single_word() {
    let (dir, index) = setup();
    let store_path = dir.path().join("cap_labels.jsonl");
    let mut store = LabelStore::open(&store_path).unwrap();
    let apply = RunConfig {
        mode: RunMode::Apply,
        ..Default::default()
    };

    LabelRun::new(apply.clone()).execute(&index, &mut store).unwrap();

    let rerun = LabelRun::new(apply.clone()).execute(&index, &mut store).unwrap();
    assert_eq!(rerun.skipped, 2);
    assert_eq!(rerun.written, 0);

    let forced = RunConfig {
        force: true,
        word_filter: Some("ROT".to_string()),
        ..apply
    };
    let summary = LabelRun::new(forced).execute(&index, &mut store).unwrap();
    assert_eq!(summary.examined, 1);
    assert_eq!(summary.written, 1);

    let reopened = LabelStore::open(&store_path).unwrap();
    assert_eq!(reopened.len(), 3);
}

#[test]
fn test_unreadable_index_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_index(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CapError::Read { .. }));
    assert!(err.to_string().contains("missing.json"));
}
