//! Grid locations and motion types
//!
//! Both alphabets are closed. Parsing is case-insensitive and returns
//! `None` for anything outside the alphabet.

use serde::{Deserialize, Serialize};

/// One of the 8 compass points on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridLocation {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl GridLocation {
    /// All locations, clockwise from north
    pub const ALL: [GridLocation; 8] = [
        GridLocation::N,
        GridLocation::NE,
        GridLocation::E,
        GridLocation::SE,
        GridLocation::S,
        GridLocation::SW,
        GridLocation::W,
        GridLocation::NW,
    ];

    /// Parse a location string (case-insensitive)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "n" => Some(Self::N),
            "ne" => Some(Self::NE),
            "e" => Some(Self::E),
            "se" => Some(Self::SE),
            "s" => Some(Self::S),
            "sw" => Some(Self::SW),
            "w" => Some(Self::W),
            "nw" => Some(Self::NW),
            _ => None,
        }
    }

    /// Lower-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "n",
            Self::NE => "ne",
            Self::E => "e",
            Self::SE => "se",
            Self::S => "s",
            Self::SW => "sw",
            Self::W => "w",
            Self::NW => "nw",
        }
    }
}

impl std::fmt::Display for GridLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Motion type of one actor during one beat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    Pro,
    Anti,
    Float,
    Dash,
    Static,
}

impl MotionType {
    /// Parse a motion type string (case-insensitive)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "pro" => Some(Self::Pro),
            "anti" => Some(Self::Anti),
            "float" => Some(Self::Float),
            "dash" => Some(Self::Dash),
            "static" => Some(Self::Static),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pro => "pro",
            Self::Anti => "anti",
            Self::Float => "float",
            Self::Dash => "dash",
            Self::Static => "static",
        }
    }
}

impl std::fmt::Display for MotionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parse_is_case_insensitive() {
        assert_eq!(GridLocation::parse("NE"), Some(GridLocation::NE));
        assert_eq!(GridLocation::parse(" sw "), Some(GridLocation::SW));
        assert_eq!(GridLocation::parse("north"), None);
        assert_eq!(GridLocation::parse(""), None);
    }

    #[test]
    fn test_location_labels_round_trip() {
        for loc in GridLocation::ALL {
            assert_eq!(GridLocation::parse(loc.as_str()), Some(loc));
        }
    }

    #[test]
    fn test_motion_parse() {
        assert_eq!(MotionType::parse("PRO"), Some(MotionType::Pro));
        assert_eq!(MotionType::parse("Static"), Some(MotionType::Static));
        assert_eq!(MotionType::parse("spin"), None);
    }
}
