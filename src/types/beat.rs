//! Sequence entries: raw (as supplied by the sequence index) and normalized
//!
//! Beat 0 is the starting pose. Beats 1.. are movement events for two
//! actors, blue (actor A) and red (actor B).

use serde::{Deserialize, Serialize};
use crate::types::{GridLocation, MotionType};

/// Per-actor attributes as found in the sequence index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawActorAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_loc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_loc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion_type: Option<String>,
}

impl RawActorAttributes {
    pub fn new(start_loc: &str, end_loc: &str, motion_type: &str) -> Self {
        Self {
            start_loc: Some(start_loc.to_string()),
            end_loc: Some(end_loc.to_string()),
            motion_type: Some(motion_type.to_string()),
        }
    }
}

/// One element of a word's sequence list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSequenceEntry {
    /// Beat index, 0 = starting pose. Negative indices are ignored.
    pub beat: i64,
    /// Motif label
    #[serde(default)]
    pub letter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue_attributes: Option<RawActorAttributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_attributes: Option<RawActorAttributes>,
}

/// A word and its full sequence, as stored in the sequence index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSequence {
    pub word: String,
    #[serde(default)]
    pub sequence: Vec<RawSequenceEntry>,
}

/// Normalized motion of one actor. Fields are `None` when absent or unparseable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorMotion {
    pub start: Option<GridLocation>,
    pub end: Option<GridLocation>,
    pub motion: Option<MotionType>,
}

impl ActorMotion {
    pub fn new(start: GridLocation, end: GridLocation, motion: MotionType) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            motion: Some(motion),
        }
    }

    /// Both locations, if present
    pub fn locations(&self) -> Option<(GridLocation, GridLocation)> {
        Some((self.start?, self.end?))
    }

    /// All three fields, if present
    pub fn complete(&self) -> Option<(GridLocation, GridLocation, MotionType)> {
        Some((self.start?, self.end?, self.motion?))
    }
}

/// A beat in canonical form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedBeat {
    /// Beat index, always >= 1
    pub beat_number: u32,
    /// Motif label
    pub motif: String,
    /// Actor A (blue)
    pub blue: ActorMotion,
    /// Actor B (red)
    pub red: ActorMotion,
}

impl NormalizedBeat {
    /// Do the two actors carry different motion types?
    /// `false` when either type is absent.
    pub fn actors_differ_in_motion(&self) -> bool {
        match (self.blue.motion, self.red.motion) {
            (Some(b), Some(r)) => b != r,
            _ => false,
        }
    }
}

/// Output of the beat normalizer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedSequence {
    /// Final beat ends where the starting pose is
    pub is_circular: bool,
    /// Beats ordered by beat number, starting pose excluded
    pub beats: Vec<NormalizedBeat>,
}

impl NormalizedSequence {
    pub fn len(&self) -> usize {
        self.beats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }
}
