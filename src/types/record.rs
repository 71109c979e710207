//! Label records written to the label store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::types::{CapType, ClassificationResult};

/// One designation of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designation {
    pub components: Vec<String>,
    pub cap_type: CapType,
}

/// Pipeline-generated label for one word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRecord {
    pub word: String,
    /// Empty when the word could not be classified
    pub designations: Vec<Designation>,
    /// Always true: auto-labels are never self-confirmed
    pub needs_verification: bool,
    pub auto_generated: bool,
    pub generated_at: DateTime<Utc>,
    pub note: String,
}

impl LabelRecord {
    /// Build the record for a classification result
    pub fn from_result(word: &str, result: &ClassificationResult) -> Self {
        let designations = match &result.cap_type {
            Some(cap_type) => vec![Designation {
                components: result.components.clone(),
                cap_type: cap_type.clone(),
            }],
            None => Vec::new(),
        };

        Self {
            word: word.to_string(),
            designations,
            needs_verification: true,
            auto_generated: true,
            generated_at: Utc::now(),
            note: format!("auto: {}", result.summary()),
        }
    }

    pub fn is_classified(&self) -> bool {
        !self.designations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClassifyReason;

    #[test]
    fn test_unclassified_record_has_no_designations() {
        let result = ClassificationResult::empty(ClassifyReason::C004_ODD_LENGTH);
        let record = LabelRecord::from_result("abc", &result);
        assert!(record.designations.is_empty());
        assert!(record.needs_verification);
        assert!(record.auto_generated);
        assert!(record.note.contains("C004_ODD_LENGTH"));
    }

    #[test]
    fn test_modular_record() {
        let record = LabelRecord::from_result("abab", &ClassificationResult::modular());
        assert_eq!(record.designations.len(), 1);
        assert_eq!(record.designations[0].cap_type, CapType::Modular);
        assert_eq!(record.designations[0].components, vec!["modular"]);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["needsVerification"], true);
        assert_eq!(json["designations"][0]["capType"], "modular");
    }
}
