//! Transformation tags produced by the pairwise comparator

use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};

/// A single transformation relating two beats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformationTag {
    Repeated,
    #[serde(rename = "rotated_90")]
    Rotated90,
    #[serde(rename = "rotated_180")]
    Rotated180,
    #[serde(rename = "rotated_270")]
    Rotated270,
    Mirrored,
    Flipped,
    Swapped,
    Inverted,
}

impl TransformationTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Repeated => "repeated",
            Self::Rotated90 => "rotated_90",
            Self::Rotated180 => "rotated_180",
            Self::Rotated270 => "rotated_270",
            Self::Mirrored => "mirrored",
            Self::Flipped => "flipped",
            Self::Swapped => "swapped",
            Self::Inverted => "inverted",
        }
    }
}

impl std::fmt::Display for TransformationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Set of tags that simultaneously map one beat onto another
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(BTreeSet<TransformationTag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The exclusive `{repeated}` set
    pub fn repeated() -> Self {
        Self::from_iter([TransformationTag::Repeated])
    }

    pub fn insert(&mut self, tag: TransformationTag) {
        self.0.insert(tag);
    }

    pub fn contains(&self, tag: TransformationTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TransformationTag> + '_ {
        self.0.iter().copied()
    }

    /// Canonical text form: tag labels sorted alphabetically, joined with `+`.
    /// The empty set is `"none"`.
    pub fn canonical(&self) -> String {
        if self.0.is_empty() {
            return "none".to_string();
        }
        let mut labels: Vec<&str> = self.0.iter().map(|t| t.as_str()).collect();
        labels.sort_unstable();
        labels.join("+")
    }
}

impl FromIterator<TransformationTag> for TagSet {
    fn from_iter<I: IntoIterator<Item = TransformationTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for TagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_is_order_independent() {
        let a = TagSet::from_iter([TransformationTag::Swapped, TransformationTag::Rotated180]);
        let b = TagSet::from_iter([TransformationTag::Rotated180, TransformationTag::Swapped]);
        assert_eq!(a.canonical(), "rotated_180+swapped");
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn test_empty_canonical() {
        assert_eq!(TagSet::new().canonical(), "none");
    }

    #[test]
    fn test_tag_serializes_to_label() {
        let json = serde_json::to_string(&TransformationTag::Rotated90).unwrap();
        assert_eq!(json, "\"rotated_90\"");
    }
}
