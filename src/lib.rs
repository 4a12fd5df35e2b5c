//! Deterministic candidate-job matching and career recommendation engine.
//!
//! `placement-core` provides free-text feature extraction, skill
//! vectorization, cosine similarity scoring, weighted multi-factor match
//! scoring, deterministic ranking, and career domain mapping. All operations
//! are deterministic: identical inputs always produce identical outputs,
//! byte-for-byte.
//!
//! See <https://github.com/placementenginehq/placement-engine> for the full platform.

pub mod career;
pub mod engine;
pub mod extract;
pub mod profile;
pub mod similarity;
pub mod types;
