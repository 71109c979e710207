//! CAP classifier: the full pipeline for one sequence
//!
//! normalize → circularity → even length → modular detection → halved/quartered
//! resolution → type + interval labeling
//!
//! Pure and synchronous; every intermediate structure lives only for the
//! duration of one call.

use std::collections::BTreeMap;
use tracing::debug;
use crate::MIN_BEATS;
use crate::core::graph::{BeatPairGraph, ModularDetector};
use crate::core::normalizer::BeatNormalizer;
use crate::core::resolver::{Resolution, SymmetryResolver};
use crate::types::{
    ClassificationResult, ClassifyReason, ComponentSet, Interval, NormalizedSequence,
    RawSequenceEntry, TransformKind, WordSequence,
};

/// CAP classifier
#[derive(Debug, Default)]
pub struct CapClassifier {
    normalizer: BeatNormalizer,
    detector: ModularDetector,
    resolver: SymmetryResolver,
}

impl CapClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one word's raw entries
    pub fn classify(&self, entries: &[RawSequenceEntry]) -> ClassificationResult {
        let sequence = self.normalizer.normalize(entries);
        self.classify_normalized(&sequence)
    }

    pub fn classify_word(&self, word: &WordSequence) -> ClassificationResult {
        self.classify(&word.sequence)
    }

    /// Classify an already-normalized sequence
    pub fn classify_normalized(&self, sequence: &NormalizedSequence) -> ClassificationResult {
        if !sequence.is_circular {
            return ClassificationResult::empty(ClassifyReason::C002_NOT_CIRCULAR);
        }
        if sequence.len() < MIN_BEATS {
            return ClassificationResult::empty(ClassifyReason::C003_TOO_SHORT);
        }

        if sequence.len() % 2 != 0 {
            return ClassificationResult::empty(ClassifyReason::C004_ODD_LENGTH);
        }

        let graph = BeatPairGraph::build(&sequence.beats);
        if self.detector.detect(&sequence.beats, &graph).is_modular {
            return ClassificationResult::modular();
        }

        let resolution = self.resolver.resolve(&sequence.beats);
        let result = label(&resolution);
        debug!(
            beats = sequence.len(),
            cap_type = ?result.cap_type,
            reason = result.reason.code(),
            "classified"
        );
        result
    }
}

/// Turn a resolution into the final result
pub fn label(resolution: &Resolution) -> ClassificationResult {
    let intervals = transformation_intervals(&resolution.components, resolution.quartered);
    ClassificationResult::from_components(&resolution.components, intervals)
}

/// Interval of each recorded transform family present in `components`.
/// Only rotation and swap have a quartered variant.
pub fn transformation_intervals(
    components: &ComponentSet,
    quartered: bool,
) -> BTreeMap<TransformKind, Interval> {
    TransformKind::ALL
        .into_iter()
        .filter(|kind| components.involves(kind.word()))
        .map(|kind| {
            let interval = match kind {
                TransformKind::Rotation | TransformKind::Swap if quartered => Interval::Quartered,
                _ => Interval::Halved,
            };
            (kind, interval)
        })
        .collect()
}
