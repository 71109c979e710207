//! Core modules for capsym

pub mod grid;
pub mod normalizer;
pub mod comparator;
pub mod graph;
pub mod resolver;
pub mod classifier;
pub mod index;
pub mod store;
pub mod run;
pub mod api;

pub use grid::{GridTransform, invert_motion};
pub use normalizer::BeatNormalizer;
pub use comparator::{PairComparator, SymmetryCheck};
pub use graph::{BeatPairGraph, ModularDetector, ModularVerdict, MotifSignature};
pub use resolver::{Resolution, SymmetryResolver};
pub use classifier::{CapClassifier, transformation_intervals};
pub use index::{load_index, parse_index};
pub use store::LabelStore;
pub use run::{LabelRun, RunConfig, RunMode, RunSummary};
pub use api::{create_router, run_server};
