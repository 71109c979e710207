//! Detected symmetry components and the immutable component set

use serde::{Deserialize, Serialize};

/// One detected whole-sequence symmetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
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
    Modular,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
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
            Self::Modular => "modular",
        }
    }

    /// Atomic transform words this component is made of
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Self::Rotated => &["rotated"],
            Self::Swapped => &["swapped"],
            Self::Mirrored => &["mirrored"],
            Self::Flipped => &["flipped"],
            Self::Inverted => &["inverted"],
            Self::Repeated => &["repeated"],
            Self::RotatedSwapped => &["rotated", "swapped"],
            Self::MirroredSwapped => &["mirrored", "swapped"],
            Self::FlippedInverted => &["flipped", "inverted"],
            Self::MirroredSwappedInverted => &["mirrored", "swapped", "inverted"],
            Self::Modular => &["modular"],
        }
    }

    pub fn involves(&self, word: &str) -> bool {
        self.words().contains(&word)
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered set of components. Every operation returns a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSet(Vec<Component>);

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `component` at the end unless already present
    #[must_use]
    pub fn with(&self, component: Component) -> Self {
        let mut next = self.0.clone();
        if !next.contains(&component) {
            next.push(component);
        }
        Self(next)
    }

    /// Remove `component` if present
    #[must_use]
    pub fn without(&self, component: Component) -> Self {
        Self(self.0.iter().copied().filter(|c| *c != component).collect())
    }

    /// Remove every listed component that is present
    #[must_use]
    pub fn without_all(&self, components: &[Component]) -> Self {
        Self(
            self.0
                .iter()
                .copied()
                .filter(|c| !components.contains(c))
                .collect(),
        )
    }

    /// Remove `old` if present, then add `new`
    #[must_use]
    pub fn replace(&self, old: Component, new: Component) -> Self {
        self.without(old).with(new)
    }

    pub fn contains(&self, component: Component) -> bool {
        self.0.contains(&component)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Component> + '_ {
        self.0.iter().copied()
    }

    /// Any component built from `word`?
    pub fn involves(&self, word: &str) -> bool {
        self.0.iter().any(|c| c.involves(word))
    }

    /// Component labels in insertion order
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl FromIterator<Component> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |set, c| set.with(c))
    }
}
