use rayon::prelude::*;

use crate::chart::Chart;

/// Maps one chart to a numeric difficulty.
///
/// Implementations run concurrently on independent charts and must not
/// share mutable state.
pub trait DifficultyScorer: Sync {
    fn score(&self, chart: &Chart) -> f64;
}

/// Scorer that rates every chart the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderScorer;

impl PlaceholderScorer {
    pub const SCORE: f64 = 1.0;
}

impl DifficultyScorer for PlaceholderScorer {
    fn score(&self, _chart: &Chart) -> f64 {
        Self::SCORE
    }
}

/// Score every chart in parallel; `result[i]` belongs to `charts[i]`.
pub fn compute_difficulties<S: DifficultyScorer>(charts: &[Chart], scorer: &S) -> Vec<f64> {
    charts.par_iter().map(|chart| scorer.score(chart)).collect()
}
