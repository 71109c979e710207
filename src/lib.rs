//! capsym: Circular Auto-Pattern (CAP) symmetry classifier
//!
//! sequence index → normalizer → pair graph / modular detector →
//! halved/quartered resolver → CAP type + intervals → label store

pub mod core;
pub mod types;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Fewest beats (after dropping the starting pose) a sequence needs
pub const MIN_BEATS: usize = 2;

// =============================================================================
// DEFAULTS - overridable from the CLI
// =============================================================================

pub const DEFAULT_INDEX_PATH: &str = "./sequence_index.json";

pub const DEFAULT_STORE_PATH: &str = "./cap_labels.jsonl";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "capsym=info";

/// Log filter with --verbose
pub const VERBOSE_LOG_FILTER: &str = "capsym=debug";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
