//! Beat-pair transformation graph and modular-pattern detection
//!
//! A sequence is modular when at least two motif labels recur at
//! non-consecutive positions and their occurrence-to-occurrence tag
//! signatures are not all the same.

use std::collections::{BTreeMap, HashMap};
use tracing::debug;
use crate::core::comparator::PairComparator;
use crate::types::{NormalizedBeat, TagSet};

/// Tag sets for every ordered pair of distinct beats, keyed by position in
/// the normalized beat list (beat numbers may repeat in malformed input)
#[derive(Debug, Clone, Default)]
pub struct BeatPairGraph {
    edges: HashMap<(usize, usize), TagSet>,
}

impl BeatPairGraph {
    /// Compare every ordered pair of distinct beats
    pub fn build(beats: &[NormalizedBeat]) -> Self {
        let comparator = PairComparator::new();
        let mut edges = HashMap::with_capacity(beats.len() * beats.len().saturating_sub(1));
        for (i, a) in beats.iter().enumerate() {
            for (j, b) in beats.iter().enumerate() {
                if i != j {
                    edges.insert((i, j), comparator.compare(a, b));
                }
            }
        }
        Self { edges }
    }

    pub fn edge(&self, from: usize, to: usize) -> Option<&TagSet> {
        self.edges.get(&(from, to))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Signature of one recurring motif
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifSignature {
    pub motif: String,
    pub occurrences: Vec<u32>,
    /// Canonical tag sets along consecutive occurrences, closed back to the first
    pub signature: Vec<String>,
}

/// Outcome of modular detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModularVerdict {
    pub is_modular: bool,
    pub motifs: Vec<MotifSignature>,
}

/// Modular pattern detector
#[derive(Debug, Default)]
pub struct ModularDetector;

impl ModularDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, beats: &[NormalizedBeat], graph: &BeatPairGraph) -> ModularVerdict {
        // BTreeMap keeps motif order deterministic
        let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (position, beat) in beats.iter().enumerate() {
            groups.entry(beat.motif.as_str()).or_default().push(position);
        }

        let motifs: Vec<MotifSignature> = groups
            .into_iter()
            .filter_map(|(motif, positions)| {
                let occurrences: Vec<u32> = positions.iter().map(|&p| beats[p].beat_number).collect();
                (!is_consecutive(&occurrences)).then(|| MotifSignature {
                    motif: motif.to_string(),
                    signature: signature(&positions, graph),
                    occurrences,
                })
            })
            .collect();

        let mut distinct: Vec<&Vec<String>> = motifs.iter().map(|m| &m.signature).collect();
        distinct.sort();
        distinct.dedup();

        let is_modular = motifs.len() >= 2 && distinct.len() >= 2;

        debug!(
            recurring = motifs.len(),
            distinct_signatures = distinct.len(),
            is_modular,
            "modular detection"
        );

        ModularVerdict { is_modular, motifs }
    }
}

/// Every occurrence directly follows the previous one. Single occurrences count.
fn is_consecutive(occurrences: &[u32]) -> bool {
    let mut sorted = occurrences.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).all(|w| w[1] == w[0] + 1)
}

fn signature(positions: &[usize], graph: &BeatPairGraph) -> Vec<String> {
    let n = positions.len();
    (0..n)
        .map(|k| {
            let from = positions[k];
            let to = positions[(k + 1) % n];
            graph
                .edge(from, to)
                .map(TagSet::canonical)
                .unwrap_or_else(|| TagSet::new().canonical())
        })
        .collect()
}
