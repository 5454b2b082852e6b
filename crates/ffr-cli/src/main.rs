mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use ffr_core::{Config, HttpClient, PlaceholderScorer, acquire_charts, score_charts};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ffr=info,ffr_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    // Validate everything before touching the network or the disk
    let config = Config::from_flags(
        args.download_charts,
        args.save_charts,
        args.songlist_url,
        args.beatbox_url,
        args.charts_file,
    )
    .context("Invalid configuration")?;

    let client = HttpClient::new().context("Failed to create HTTP client")?;
    let charts = acquire_charts(&config, &client)
        .await
        .context("Failed to acquire charts")?;

    let (_difficulties, summary) = score_charts(&charts, &PlaceholderScorer);

    info!(
        "Scored {} charts ({} notes, {} without notes)",
        summary.chart_count, summary.note_count, summary.empty_charts
    );
    if let Some(mean) = summary.mean_difficulty {
        info!("Mean difficulty: {:.2}", mean);
    }

    Ok(())
}
