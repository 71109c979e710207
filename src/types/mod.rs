//! Core types for capsym

mod location;
mod beat;
mod transform;
mod component;
mod cap_type;
mod result;
mod record;
mod error;

pub use location::{GridLocation, MotionType};
pub use beat::{RawActorAttributes, RawSequenceEntry, WordSequence, ActorMotion, NormalizedBeat, NormalizedSequence};
pub use transform::{TransformationTag, TagSet};
pub use component::{Component, ComponentSet};
pub use cap_type::CapType;
pub use result::{ClassificationResult, ClassifyReason, TransformKind, Interval};
pub use record::{LabelRecord, Designation};
pub use error::{CapError, CapResult};
