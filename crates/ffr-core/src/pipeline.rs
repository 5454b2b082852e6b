//! Top-level run: acquire charts according to the run mode, then score them.

use tracing::info;

use crate::chart::Chart;
use crate::config::{Config, RunMode};
use crate::error::{Error, Result};
use crate::fetch::fetch_charts;
use crate::network::FetchBytes;
use crate::score::{DifficultyScorer, compute_difficulties};
use crate::storage::{load_charts, save_charts};

/// Produce the chart collection for `config`.
///
/// Fetch mode downloads through `fetcher` (and saves when asked to); load
/// mode reads the chart file and never touches the network.
pub async fn acquire_charts<F: FetchBytes>(config: &Config, fetcher: &F) -> Result<Vec<Chart>> {
    match config.mode {
        RunMode::Fetch { persist } => {
            let endpoints = config.endpoints.as_ref().ok_or_else(|| {
                Error::Configuration("fetch mode requires remote endpoints".to_string())
            })?;

            let charts = fetch_charts(fetcher, endpoints, &config.fetch).await?;
            info!("Built {} charts", charts.len());

            if persist {
                save_charts(&charts, &config.charts_path)?;
            }
            Ok(charts)
        }
        RunMode::Load => load_charts(&config.charts_path),
    }
}

/// Aggregate figures reported at the end of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub chart_count: usize,
    pub note_count: usize,
    pub empty_charts: usize,
    /// `None` when there is nothing to average
    pub mean_difficulty: Option<f64>,
}

impl RunSummary {
    pub fn new(charts: &[Chart], difficulties: &[f64]) -> Self {
        let mean_difficulty = if difficulties.is_empty() {
            None
        } else {
            Some(difficulties.iter().sum::<f64>() / difficulties.len() as f64)
        };

        Self {
            chart_count: charts.len(),
            note_count: charts.iter().map(Chart::note_count).sum(),
            empty_charts: charts.iter().filter(|chart| chart.notes.is_empty()).count(),
            mean_difficulty,
        }
    }
}

/// Score `charts` and summarise the run.
pub fn score_charts<S: DifficultyScorer>(charts: &[Chart], scorer: &S) -> (Vec<f64>, RunSummary) {
    let difficulties = compute_difficulties(charts, scorer);
    let summary = RunSummary::new(charts, &difficulties);
    (difficulties, summary)
}
