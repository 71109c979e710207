//! Beat normalizer: raw sequence entries → canonical beats + circularity
//!
//! The starting pose (beat 0) is dropped from the beat list but its
//! position decides circularity.

use tracing::{debug, warn};
use crate::types::{
    ActorMotion, GridLocation, MotionType, NormalizedBeat, NormalizedSequence,
    RawActorAttributes, RawSequenceEntry,
};

/// Beat normalizer
#[derive(Debug, Default)]
pub struct BeatNormalizer;

impl BeatNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize one word's entries
    pub fn normalize(&self, entries: &[RawSequenceEntry]) -> NormalizedSequence {
        let negative = entries.iter().filter(|e| e.beat < 0).count();
        if negative > 0 {
            warn!(entries = negative, "ignoring entries with negative beat index");
        }

        let mut beats: Vec<NormalizedBeat> = entries.iter().filter_map(normalize_beat).collect();
        // stable: duplicated beat numbers keep input order
        beats.sort_by_key(|b| b.beat_number);
        for pair in beats.windows(2).filter(|w| w[0].beat_number == w[1].beat_number) {
            warn!(beat = pair[0].beat_number, "duplicate beat number");
        }

        let start_position = entries
            .iter()
            .find(|e| e.beat == 0)
            .and_then(|pose| pose.end_pos.as_deref().or(pose.start_pos.as_deref()))
            .and_then(normalize_text);

        let final_position = entries
            .iter()
            .filter(|e| beat_number(e).is_some())
            .max_by_key(|e| e.beat)
            .and_then(|last| last.end_pos.as_deref())
            .and_then(normalize_text);

        let is_circular = match (&start_position, &final_position) {
            (Some(start), Some(end)) => start == end,
            _ => false,
        };

        debug!(
            beats = beats.len(),
            start = ?start_position,
            end = ?final_position,
            is_circular,
            "normalized sequence"
        );

        NormalizedSequence { is_circular, beats }
    }
}

/// Movement beats are numbered from 1
fn beat_number(entry: &RawSequenceEntry) -> Option<u32> {
    u32::try_from(entry.beat).ok().filter(|n| *n >= 1)
}

fn normalize_beat(entry: &RawSequenceEntry) -> Option<NormalizedBeat> {
    Some(NormalizedBeat {
        beat_number: beat_number(entry)?,
        motif: entry.letter.trim().to_string(),
        blue: normalize_actor(entry.blue_attributes.as_ref()),
        red: normalize_actor(entry.red_attributes.as_ref()),
    })
}

fn normalize_actor(attrs: Option<&RawActorAttributes>) -> ActorMotion {
    let Some(attrs) = attrs else {
        return ActorMotion::default();
    };
    ActorMotion {
        start: attrs.start_loc.as_deref().and_then(GridLocation::parse),
        end: attrs.end_loc.as_deref().and_then(GridLocation::parse),
        motion: attrs.motion_type.as_deref().and_then(MotionType::parse),
    }
}

/// Lower-case and trim; blank strings count as absent
fn normalize_text(raw: &str) -> Option<String> {
    let text = raw.trim().to_lowercase();
    (!text.is_empty()).then_some(text)
}
