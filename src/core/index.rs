//! Sequence index loading

use std::path::Path;
use tracing::debug;
use crate::types::{CapError, CapResult, WordSequence};

/// Load a sequence index: a JSON array of `{word, sequence}` objects
pub fn load_index(path: impl AsRef<Path>) -> CapResult<Vec<WordSequence>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_index(&json).map_err(|source| CapError::Index {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), words = words.len(), "loaded sequence index");
    Ok(words)
}

/// Decode index JSON held in memory
pub fn parse_index(json: &str) -> Result<Vec<WordSequence>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_index() {
        let json = r#"[
            {"word": "AB", "sequence": [
                {"beat": 0, "end_pos": "alpha1"},
                {"beat": 1, "letter": "A", "end_pos": "alpha1",
                 "blue_attributes": {"start_loc": "n", "end_loc": "e", "motion_type": "pro"},
                 "red_attributes": {"start_loc": "s", "end_loc": "w", "motion_type": "anti"}}
            ]}
        ]"#;
        let words = parse_index(json).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "AB");
        assert_eq!(words[0].sequence.len(), 2);
        assert_eq!(words[0].sequence[1].letter, "A");
        assert!(words[0].sequence[0].blue_attributes.is_none());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_index("/nonexistent/capsym/index.json").unwrap_err();
        assert!(matches!(err, CapError::Read { .. }));
    }

    #[test]
    fn test_bad_json_is_index_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"word\": 1}}").unwrap();
        let err = load_index(file.path()).unwrap_err();
        assert!(matches!(err, CapError::Index { .. }));
    }
}
