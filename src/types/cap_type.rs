//! Canonical CAP type names
//!
//! A component list maps to a type through its set of atomic transform
//! words, so `rotated_swapped`, `rotated+swapped` and `[rotated, swapped]`
//! all land on the same variant.

use std::collections::BTreeSet;
use serde::{Deserialize, Serialize, Serializer, Deserializer};
use crate::types::Component;

/// Canonical type of a classified sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CapType {
    Rotated,
    Swapped,
    Mirrored,
    Flipped,
    Inverted,
    Repeated,
    RotatedSwapped,
    MirroredSwapped,
    FlippedInverted,
    MirroredSwappedInverted,
    RotatedInverted,
    SwappedInverted,
    FlippedSwapped,
    RotatedSwappedInverted,
    Modular,
    /// Word set with no named variant; holds the sorted underscore key
    Composite(String),
}

impl CapType {
    /// Map a component list to a type. `None` when the list is empty.
    pub fn from_components(components: &[Component]) -> Option<Self> {
        let words: BTreeSet<&str> = components
            .iter()
            .flat_map(|c| c.words().iter().copied())
            .collect();
        Self::from_words(words)
    }

    /// Map a type key in either spelling (`a_b` or `a+b`, any order)
    pub fn from_key(key: &str) -> Option<Self> {
        let words: BTreeSet<&str> = key
            .split(['_', '+'])
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect();
        Self::from_words(words)
    }

    fn from_words(words: BTreeSet<&str>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        let sorted: Vec<&str> = words.into_iter().collect();
        let cap = match sorted.as_slice() {
            ["rotated"] => Self::Rotated,
            ["swapped"] => Self::Swapped,
            ["mirrored"] => Self::Mirrored,
            ["flipped"] => Self::Flipped,
            ["inverted"] => Self::Inverted,
            ["repeated"] => Self::Repeated,
            ["modular"] => Self::Modular,
            ["rotated", "swapped"] => Self::RotatedSwapped,
            ["mirrored", "swapped"] => Self::MirroredSwapped,
            ["flipped", "inverted"] => Self::FlippedInverted,
            ["inverted", "mirrored", "swapped"] => Self::MirroredSwappedInverted,
            ["inverted", "rotated"] => Self::RotatedInverted,
            ["inverted", "swapped"] => Self::SwappedInverted,
            ["flipped", "swapped"] => Self::FlippedSwapped,
            ["inverted", "rotated", "swapped"] => Self::RotatedSwappedInverted,
            other => Self::Composite(other.join("_")),
        };
        Some(cap)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Rotated => "rotated",
            Self::Swapped => "swapped",
            Self::Mirrored => "mirrored",
            Self::Flipped => "flipped",
            Self::Inverted => "inverted",
            Self::Repeated => "repeated",
            Self::RotatedSwapped => "rotated_swapped",
            Self::MirroredSwapped => "mirrored_swapped",
            Self::FlippedInverted => "flipped_inverted",
            Self::MirroredSwappedInverted => "mirrored_swapped_inverted",
            Self::RotatedInverted => "rotated_inverted",
            Self::SwappedInverted => "swapped_inverted",
            Self::FlippedSwapped => "flipped_swapped",
            Self::RotatedSwappedInverted => "rotated_swapped_inverted",
            Self::Modular => "modular",
            Self::Composite(key) => key,
        }
    }
}

impl std::fmt::Display for CapType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CapType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CapType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Self::from_key(&key)
            .ok_or_else(|| serde::de::Error::custom("empty cap type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellings_map_to_same_variant() {
        assert_eq!(CapType::from_key("rotated_swapped"), Some(CapType::RotatedSwapped));
        assert_eq!(CapType::from_key("rotated+swapped"), Some(CapType::RotatedSwapped));
        assert_eq!(CapType::from_key("swapped_rotated"), Some(CapType::RotatedSwapped));
        assert_eq!(
            CapType::from_components(&[Component::Rotated, Component::Swapped]),
            Some(CapType::RotatedSwapped)
        );
    }

    #[test]
    fn test_compound_component_maps_to_its_variant() {
        assert_eq!(
            CapType::from_components(&[Component::MirroredSwappedInverted]),
            Some(CapType::MirroredSwappedInverted)
        );
        assert_eq!(
            CapType::from_key("mirrored+swapped+inverted"),
            Some(CapType::MirroredSwappedInverted)
        );
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(CapType::from_components(&[]), None);
        assert_eq!(CapType::from_key(""), None);
    }

    #[test]
    fn test_unlisted_word_set_is_composite() {
        let cap = CapType::from_components(&[Component::Repeated, Component::Mirrored]).unwrap();
        assert_eq!(cap, CapType::Composite("mirrored_repeated".to_string()));
        assert_eq!(CapType::from_key(cap.as_str()), Some(cap));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&CapType::FlippedInverted).unwrap();
        assert_eq!(json, "\"flipped_inverted\"");
        let back: CapType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CapType::FlippedInverted);
    }
}
