//! Halved/quartered symmetry resolver
//!
//! Halved: beat i against beat i + N/2, for every i in the first half.
//! Quartered (N % 4 == 0): quarter-turn checks across quarter boundaries,
//! which can only elevate a half-turn rotation to `rotated_swapped`.
//!
//! Detection order:
//! 1. rotated, swapped, mirrored, flipped, inverted, repeated
//! 2. rotated+swapped, mirrored+swapped (swap must be meaningful)
//! 3. flipped+inverted (replaces flipped)
//! 4. mirrored+swapped+inverted (replaces mirrored, swapped, inverted,
//!    mirrored+swapped and flipped+inverted)
//! 5. quarter rotation+swap, else mixed-slice quarter rotation

use tracing::debug;
use crate::core::comparator::SymmetryCheck;
use crate::core::grid::GridTransform;
use crate::types::{Component, ComponentSet, NormalizedBeat};

/// Quarter-turn directions tried for quartered checks
const QUARTER_TURNS: [GridTransform; 2] = [GridTransform::Rotate90Ccw, GridTransform::Rotate270Ccw];

/// Resolver output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub components: ComponentSet,
    /// A quarter-level rotation test matched
    pub quartered: bool,
}

/// How a quarter boundary relates the two slices it separates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Quarter turn without actor swap only
    PureRotation,
    /// Quarter turn with actor swap only
    SwappedRotation,
    /// Both hold (actors share locations and motion)
    Both,
    NoRotation,
}

impl BoundaryKind {
    fn has_rotation(&self) -> bool {
        !matches!(self, Self::NoRotation)
    }

    fn has_pure(&self) -> bool {
        matches!(self, Self::PureRotation | Self::Both)
    }
}

/// Halved/quartered symmetry resolver
#[derive(Debug, Default)]
pub struct SymmetryResolver;

impl SymmetryResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the component set of an even-length sequence.
    /// Odd or short sequences resolve to nothing.
    pub fn resolve(&self, beats: &[NormalizedBeat]) -> Resolution {
        let n = beats.len();
        if n < 2 || n % 2 != 0 {
            return Resolution::default();
        }

        let mut components = self.resolve_halved(beats);
        let mut quartered = false;

        if n % 4 == 0 {
            let quarter = n / 4;
            if quarter_rotation_swap(beats, quarter) && swap_is_meaningful(&beats[..3 * quarter]) {
                debug!(quarter, "quarter rotation+swap across all boundaries");
                components = elevate_to_rotated_swapped(&components);
                quartered = true;
            } else if mixed_slice_rotation(beats, quarter) {
                debug!(quarter, "mixed-slice quarter rotation");
                components = elevate_to_rotated_swapped(&components);
                quartered = true;
            }
        }

        Resolution { components, quartered }
    }

    fn resolve_halved(&self, beats: &[NormalizedBeat]) -> ComponentSet {
        let half = beats.len() / 2;
        let holds = |check: SymmetryCheck| (0..half).all(|i| check.holds(&beats[i], &beats[i + half]));

        let first_half = &beats[..half];
        let swap_ok = swap_is_meaningful(first_half);

        let simple = [
            (SymmetryCheck::ROTATED, Component::Rotated, true),
            (SymmetryCheck::SWAPPED, Component::Swapped, true),
            (SymmetryCheck::MIRRORED, Component::Mirrored, true),
            (SymmetryCheck::FLIPPED, Component::Flipped, true),
            (SymmetryCheck::INVERTED, Component::Inverted, true),
            (SymmetryCheck::REPEATED, Component::Repeated, true),
            (SymmetryCheck::ROTATED_SWAPPED, Component::RotatedSwapped, swap_ok),
            (SymmetryCheck::MIRRORED_SWAPPED, Component::MirroredSwapped, swap_ok),
        ];

        let mut set = ComponentSet::new();
        for (check, component, guard) in simple {
            if holds(check) {
                if guard {
                    set = set.with(component);
                } else {
                    debug!(%component, "detection rejected by guard");
                }
            }
        }

        if holds(SymmetryCheck::FLIPPED_INVERTED) {
            set = apply_flipped_inverted(&set);
        }
        if holds(SymmetryCheck::MIRRORED_SWAPPED_INVERTED) && swap_ok {
            set = apply_mirrored_swapped_inverted(&set);
        }

        debug!(half, components = ?set.labels(), "halved resolution");
        set
    }
}

/// Swapping actors means something only if some beat has actors with
/// different motion types
pub fn swap_is_meaningful(beats: &[NormalizedBeat]) -> bool {
    beats.iter().any(NormalizedBeat::actors_differ_in_motion)
}

/// flipped+inverted supersedes flipped
#[must_use]
pub fn apply_flipped_inverted(set: &ComponentSet) -> ComponentSet {
    set.without(Component::Flipped).with(Component::FlippedInverted)
}

/// mirrored+swapped+inverted supersedes every label it explains
#[must_use]
pub fn apply_mirrored_swapped_inverted(set: &ComponentSet) -> ComponentSet {
    set.without_all(&[
        Component::Mirrored,
        Component::Swapped,
        Component::Inverted,
        Component::MirroredSwapped,
        Component::FlippedInverted,
    ])
    .with(Component::MirroredSwappedInverted)
}

/// A quarter-level rotation+swap replaces a plain half-turn rotation
#[must_use]
pub fn elevate_to_rotated_swapped(set: &ComponentSet) -> ComponentSet {
    set.replace(Component::Rotated, Component::RotatedSwapped)
}

/// Quarter turn with swap across the three inner boundaries, one direction
fn quarter_rotation_swap(beats: &[NormalizedBeat], quarter: usize) -> bool {
    QUARTER_TURNS.into_iter().any(|turn| {
        let check = SymmetryCheck::quarter(turn, true);
        (0..3).all(|q| {
            (0..quarter).all(|i| check.holds(&beats[q * quarter + i], &beats[(q + 1) * quarter + i]))
        })
    })
}

/// Classify the boundary from slice `q` to slice `(q + 1) % 4`
pub fn classify_boundary(beats: &[NormalizedBeat], quarter: usize, q: usize) -> BoundaryKind {
    let from = q * quarter;
    let to = ((q + 1) % 4) * quarter;
    let slice_holds = |swap: bool| {
        QUARTER_TURNS.into_iter().any(|turn| {
            let check = SymmetryCheck::quarter(turn, swap);
            (0..quarter).all(|i| check.holds(&beats[from + i], &beats[to + i]))
        })
    };

    match (slice_holds(false), slice_holds(true)) {
        (true, false) => BoundaryKind::PureRotation,
        (false, true) => BoundaryKind::SwappedRotation,
        (true, true) => BoundaryKind::Both,
        (false, false) => BoundaryKind::NoRotation,
    }
}

/// Every boundary rotates, at least one only with swap, at least one without
fn mixed_slice_rotation(beats: &[NormalizedBeat], quarter: usize) -> bool {
    let kinds: Vec<BoundaryKind> = (0..4).map(|q| classify_boundary(beats, quarter, q)).collect();
    kinds.iter().all(BoundaryKind::has_rotation)
        && kinds.iter().any(|k| *k == BoundaryKind::SwappedRotation)
        && kinds.iter().any(BoundaryKind::has_pure)
}
