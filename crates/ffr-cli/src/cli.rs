//! CLI argument definitions for ffr.

use std::path::PathBuf;

use clap::Parser;
use ffr_core::config::env::{BEATBOX_URL_VAR, SONGLIST_URL_VAR};
use ffr_core::config::storage::CHARTS_FILE_NAME;

#[derive(Parser)]
#[command(name = "ffr")]
#[command(about = "FFR chart downloader and difficulty estimator", version)]
pub struct Args {
    /// Download charts from FFR instead of loading them from disk
    #[arg(long)]
    pub download_charts: bool,

    /// Save downloaded charts to disk (requires --download-charts)
    #[arg(long)]
    pub save_charts: bool,

    /// Chart file to save to or load from
    #[arg(long, value_name = "FILE", default_value = CHARTS_FILE_NAME)]
    pub charts_file: PathBuf,

    /// Song list URL
    #[arg(long, env = SONGLIST_URL_VAR)]
    pub songlist_url: Option<String>,

    /// Beatbox URL template; `{level}` is replaced by the song level, otherwise the level is appended
    #[arg(long, env = BEATBOX_URL_VAR)]
    pub beatbox_url: Option<String>,
}
