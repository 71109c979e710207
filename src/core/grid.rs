//! Grid transform registry
//!
//! Fixed bijections over the 8 compass locations plus the motion-type
//! inverter. Rotations are counter-clockwise.

use crate::types::{GridLocation, MotionType};
use crate::types::GridLocation::*;

/// A location transform used for symmetry checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridTransform {
    Rotate90Ccw,
    Rotate180,
    Rotate270Ccw,
    MirrorVertical,
    FlipHorizontal,
}

impl GridTransform {
    /// Positional transforms in comparator priority order
    pub const PRIORITY: [GridTransform; 5] = [
        GridTransform::Rotate90Ccw,
        GridTransform::Rotate180,
        GridTransform::Rotate270Ccw,
        GridTransform::MirrorVertical,
        GridTransform::FlipHorizontal,
    ];

    pub fn apply(&self, loc: GridLocation) -> GridLocation {
        match self {
            Self::Rotate90Ccw => rotate90ccw(loc),
            Self::Rotate180 => rotate180(loc),
            Self::Rotate270Ccw => rotate270ccw(loc),
            Self::MirrorVertical => mirror_vertical(loc),
            Self::FlipHorizontal => flip_horizontal(loc),
        }
    }
}

pub fn rotate90ccw(loc: GridLocation) -> GridLocation {
    match loc {
        N => W,
        NE => NW,
        E => N,
        SE => NE,
        S => E,
        SW => SE,
        W => S,
        NW => SW,
    }
}

pub fn rotate180(loc: GridLocation) -> GridLocation {
    match loc {
        N => S,
        NE => SW,
        E => W,
        SE => NW,
        S => N,
        SW => NE,
        W => E,
        NW => SE,
    }
}

pub fn rotate270ccw(loc: GridLocation) -> GridLocation {
    match loc {
        N => E,
        NE => SE,
        E => S,
        SE => SW,
        S => W,
        SW => NW,
        W => N,
        NW => NE,
    }
}

/// Reflect across the north-south axis (east and west trade places)
pub fn mirror_vertical(loc: GridLocation) -> GridLocation {
    match loc {
        N => N,
        NE => NW,
        E => W,
        SE => SW,
        S => S,
        SW => SE,
        W => E,
        NW => NE,
    }
}

/// Reflect across the east-west axis (north and south trade places)
pub fn flip_horizontal(loc: GridLocation) -> GridLocation {
    match loc {
        N => S,
        NE => SE,
        E => E,
        SE => NE,
        S => N,
        SW => NW,
        W => W,
        NW => SW,
    }
}

/// pro <-> anti; identity on float, dash and static
pub fn invert_motion(motion: MotionType) -> MotionType {
    match motion {
        MotionType::Pro => MotionType::Anti,
        MotionType::Anti => MotionType::Pro,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_bijection(f: fn(GridLocation) -> GridLocation) -> bool {
        let image: HashSet<_> = GridLocation::ALL.iter().map(|l| f(*l)).collect();
        image.len() == GridLocation::ALL.len()
    }

    #[test]
    fn test_all_transforms_are_bijections() {
        assert!(is_bijection(rotate90ccw));
        assert!(is_bijection(rotate180));
        assert!(is_bijection(rotate270ccw));
        assert!(is_bijection(mirror_vertical));
        assert!(is_bijection(flip_horizontal));
    }

    #[test]
    fn test_rotation_composition() {
        for loc in GridLocation::ALL {
            assert_eq!(rotate90ccw(rotate90ccw(loc)), rotate180(loc));
            assert_eq!(rotate90ccw(rotate270ccw(loc)), loc);
            assert_eq!(rotate180(rotate180(loc)), loc);
        }
    }

    #[test]
    fn test_reflections_are_involutions() {
        for loc in GridLocation::ALL {
            assert_eq!(mirror_vertical(mirror_vertical(loc)), loc);
            assert_eq!(flip_horizontal(flip_horizontal(loc)), loc);
            // mirror then flip is a half turn
            assert_eq!(flip_horizontal(mirror_vertical(loc)), rotate180(loc));
        }
    }

    #[test]
    fn test_reflection_fixed_points() {
        assert_eq!(mirror_vertical(N), N);
        assert_eq!(mirror_vertical(S), S);
        assert_eq!(flip_horizontal(E), E);
        assert_eq!(flip_horizontal(W), W);
    }

    #[test]
    fn test_ccw_direction() {
        assert_eq!(rotate90ccw(N), W);
        assert_eq!(rotate270ccw(N), E);
    }

    #[test]
    fn test_invert_motion() {
        assert_eq!(invert_motion(MotionType::Pro), MotionType::Anti);
        assert_eq!(invert_motion(MotionType::Anti), MotionType::Pro);
        assert_eq!(invert_motion(MotionType::Float), MotionType::Float);
        assert_eq!(invert_motion(MotionType::Dash), MotionType::Dash);
        assert_eq!(invert_motion(MotionType::Static), MotionType::Static);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(GridTransform::PRIORITY[0], GridTransform::Rotate90Ccw);
        assert_eq!(GridTransform::PRIORITY[4], GridTransform::FlipHorizontal);
        assert_eq!(GridTransform::Rotate180.apply(NE), SW);
    }
}
