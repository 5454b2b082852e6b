//! Chart difficulty scoring.
//!
//! Scoring itself is not defined here; `DifficultyScorer` is the seam and
//! `compute_difficulties` fans charts out across a worker pool.

mod difficulty;

pub use difficulty::*;
