//! Pairwise transformation comparator
//!
//! Two flavours:
//! - [`PairComparator::compare`] returns every tag relating beat A to beat B,
//!   testing position, colour swap and motion inversion independently
//!   (location-only where a test does not involve motion).
//! - [`SymmetryCheck`] is a strict predicate (locations AND motion types)
//!   used beat-by-beat by the halved/quartered resolver.
//!
//! Any test whose fields are absent is a non-match.

use crate::core::grid::{invert_motion, GridTransform};
use crate::types::{ActorMotion, NormalizedBeat, TagSet, TransformationTag};

/// Loose comparator producing tag sets
#[derive(Debug, Default)]
pub struct PairComparator;

impl PairComparator {
    pub fn new() -> Self {
        Self
    }

    /// All tags mapping `a` onto `b`. Exact repetition yields `{repeated}` only.
    pub fn compare(&self, a: &NormalizedBeat, b: &NormalizedBeat) -> TagSet {
        if is_repetition(a, b) {
            return TagSet::repeated();
        }

        let mut tags = TagSet::new();

        if let Some(tag) = positional_tag(a, b) {
            tags.insert(tag);
        }
        if is_location_swap(a, b) {
            tags.insert(TransformationTag::Swapped);
        }
        if is_motion_inversion(a, b) {
            tags.insert(TransformationTag::Inverted);
        }

        tags
    }
}

fn is_repetition(a: &NormalizedBeat, b: &NormalizedBeat) -> bool {
    let same = |x: &ActorMotion, y: &ActorMotion| match (x.complete(), y.complete()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    };
    same(&a.blue, &b.blue) && same(&a.red, &b.red)
}

/// First transform (in priority order) mapping both actors' locations
fn positional_tag(a: &NormalizedBeat, b: &NormalizedBeat) -> Option<TransformationTag> {
    GridTransform::PRIORITY
        .into_iter()
        .find(|t| maps_locations(*t, &a.blue, &b.blue) && maps_locations(*t, &a.red, &b.red))
        .map(|t| match t {
            GridTransform::Rotate90Ccw => TransformationTag::Rotated90,
            GridTransform::Rotate180 => TransformationTag::Rotated180,
            GridTransform::Rotate270Ccw => TransformationTag::Rotated270,
            GridTransform::MirrorVertical => TransformationTag::Mirrored,
            GridTransform::FlipHorizontal => TransformationTag::Flipped,
        })
}

fn maps_locations(t: GridTransform, from: &ActorMotion, to: &ActorMotion) -> bool {
    match (from.locations(), to.locations()) {
        (Some((fs, fe)), Some((ts, te))) => t.apply(fs) == ts && t.apply(fe) == te,
        _ => false,
    }
}

fn is_location_swap(a: &NormalizedBeat, b: &NormalizedBeat) -> bool {
    let same = |x: &ActorMotion, y: &ActorMotion| match (x.locations(), y.locations()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    };
    same(&a.blue, &b.red) && same(&a.red, &b.blue)
}

fn is_motion_inversion(a: &NormalizedBeat, b: &NormalizedBeat) -> bool {
    let inverts = |x: &ActorMotion, y: &ActorMotion| match (x.motion, y.motion) {
        (Some(x), Some(y)) => invert_motion(x) == y,
        _ => false,
    };
    inverts(&a.blue, &b.blue) && inverts(&a.red, &b.red)
}

/// Strict beat-to-beat predicate: optional location transform, optional
/// actor swap, optional motion inversion, all required for both actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymmetryCheck {
    pub transform: Option<GridTransform>,
    pub swap: bool,
    pub invert: bool,
}

impl SymmetryCheck {
    pub const REPEATED: Self = Self::new(None, false, false);
    pub const ROTATED: Self = Self::new(Some(GridTransform::Rotate180), false, false);
    pub const SWAPPED: Self = Self::new(None, true, false);
    pub const MIRRORED: Self = Self::new(Some(GridTransform::MirrorVertical), false, false);
    pub const FLIPPED: Self = Self::new(Some(GridTransform::FlipHorizontal), false, false);
    pub const INVERTED: Self = Self::new(None, false, true);
    pub const ROTATED_SWAPPED: Self = Self::new(Some(GridTransform::Rotate180), true, false);
    pub const MIRRORED_SWAPPED: Self = Self::new(Some(GridTransform::MirrorVertical), true, false);
    pub const FLIPPED_INVERTED: Self = Self::new(Some(GridTransform::FlipHorizontal), false, true);
    pub const MIRRORED_SWAPPED_INVERTED: Self =
        Self::new(Some(GridTransform::MirrorVertical), true, true);

    pub const fn new(transform: Option<GridTransform>, swap: bool, invert: bool) -> Self {
        Self { transform, swap, invert }
    }

    /// Quarter-turn check in one rotational direction
    pub const fn quarter(transform: GridTransform, swap: bool) -> Self {
        Self::new(Some(transform), swap, false)
    }

    /// Does `b` equal `a` under this check?
    pub fn holds(&self, a: &NormalizedBeat, b: &NormalizedBeat) -> bool {
        let (to_blue, to_red) = if self.swap { (&b.red, &b.blue) } else { (&b.blue, &b.red) };
        self.actor_holds(&a.blue, to_blue) && self.actor_holds(&a.red, to_red)
    }

    fn actor_holds(&self, from: &ActorMotion, to: &ActorMotion) -> bool {
        let (Some((fs, fe, fm)), Some((ts, te, tm))) = (from.complete(), to.complete()) else {
            return false;
        };
        let (es, ee) = match self.transform {
            Some(t) => (t.apply(fs), t.apply(fe)),
            None => (fs, fe),
        };
        let em = if self.invert { invert_motion(fm) } else { fm };
        es == ts && ee == te && em == tm
    }
}
