//! Classification result and reason codes

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::types::{CapType, ComponentSet};

/// Transform families whose interval is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    Rotation,
    Swap,
    Mirror,
    Invert,
}

impl TransformKind {
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Rotation,
        TransformKind::Swap,
        TransformKind::Mirror,
        TransformKind::Invert,
    ];

    /// Component word that signals this family
    pub fn word(&self) -> &'static str {
        match self {
            Self::Rotation => "rotated",
            Self::Swap => "swapped",
            Self::Mirror => "mirrored",
            Self::Invert => "inverted",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rotation => "rotation",
            Self::Swap => "swap",
            Self::Mirror => "mirror",
            Self::Invert => "invert",
        }
    }
}

/// Offset at which a symmetry shows up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Halved,
    Quartered,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Halved => "halved",
            Self::Quartered => "quartered",
        }
    }
}

/// Reason codes for classification outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ClassifyReason {
    /// One or more symmetries detected
    C001_CLASSIFIED,
    /// Final beat does not end at the starting position
    C002_NOT_CIRCULAR,
    /// Fewer than 2 beats
    C003_TOO_SHORT,
    /// Odd beat count, cannot halve
    C004_ODD_LENGTH,
    /// Circular but no transform holds
    C005_NO_TRANSFORM,
    /// Recurring motifs with distinct signatures
    C006_MODULAR,
}

impl ClassifyReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::C001_CLASSIFIED => "C001_CLASSIFIED",
            Self::C002_NOT_CIRCULAR => "C002_NOT_CIRCULAR",
            Self::C003_TOO_SHORT => "C003_TOO_SHORT",
            Self::C004_ODD_LENGTH => "C004_ODD_LENGTH",
            Self::C005_NO_TRANSFORM => "C005_NO_TRANSFORM",
            Self::C006_MODULAR => "C006_MODULAR",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::C001_CLASSIFIED => "Symmetry detected",
            Self::C002_NOT_CIRCULAR => "Sequence is not circular",
            Self::C003_TOO_SHORT => "Fewer than 2 beats",
            Self::C004_ODD_LENGTH => "Odd beat count cannot be halved",
            Self::C005_NO_TRANSFORM => "No transformation matches",
            Self::C006_MODULAR => "Modular motif pattern",
        }
    }

    /// Did classification produce a type?
    pub fn is_classified(&self) -> bool {
        matches!(self, Self::C001_CLASSIFIED | Self::C006_MODULAR)
    }
}

impl std::fmt::Display for ClassifyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// The only artifact handed to the label store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub cap_type: Option<CapType>,
    pub components: Vec<String>,
    pub transformation_intervals: BTreeMap<TransformKind, Interval>,
    pub reason: ClassifyReason,
}

impl ClassificationResult {
    /// A "no result" outcome
    pub fn empty(reason: ClassifyReason) -> Self {
        Self {
            cap_type: None,
            components: Vec::new(),
            transformation_intervals: BTreeMap::new(),
            reason,
        }
    }

    pub fn modular() -> Self {
        Self {
            cap_type: Some(CapType::Modular),
            components: vec![CapType::Modular.as_str().to_string()],
            transformation_intervals: BTreeMap::new(),
            reason: ClassifyReason::C006_MODULAR,
        }
    }

    /// Result for a resolved component set; empty sets become `C005_NO_TRANSFORM`
    pub fn from_components(
        components: &ComponentSet,
        transformation_intervals: BTreeMap<TransformKind, Interval>,
    ) -> Self {
        let listed: Vec<_> = components.iter().collect();
        match CapType::from_components(&listed) {
            Some(cap_type) => Self {
                cap_type: Some(cap_type),
                components: components.labels(),
                transformation_intervals,
                reason: ClassifyReason::C001_CLASSIFIED,
            },
            None => Self::empty(ClassifyReason::C005_NO_TRANSFORM),
        }
    }

    pub fn is_classified(&self) -> bool {
        self.cap_type.is_some()
    }

    pub fn interval(&self, kind: TransformKind) -> Option<Interval> {
        self.transformation_intervals.get(&kind).copied()
    }

    /// One-line summary for the label note
    pub fn summary(&self) -> String {
        match &self.cap_type {
            None => format!("unclassified ({})", self.reason.code()),
            Some(cap) => {
                let intervals: Vec<String> = self
                    .transformation_intervals
                    .iter()
                    .map(|(k, v)| format!("{}={}", k.as_str(), v.as_str()))
                    .collect();
                if intervals.is_empty() {
                    format!("{} [{}]", cap, self.components.join(", "))
                } else {
                    format!(
                        "{} [{}] intervals: {}",
                        cap,
                        self.components.join(", "),
                        intervals.join(", ")
                    )
                }
            }
        }
    }
}
