//! # ffr-core
//!
//! Core library for acquiring and storing FFR charts.
//!
//! This crate provides:
//! - Chart data structures (`SongInfo`, `Note`, `Chart`)
//! - Batched, retrying download of the song list and beatboxes
//! - A compressed on-disk chart format
//! - The scoring seam that consumes the chart collection

pub mod chart;
pub mod config;
pub mod error;
pub mod fetch;
pub mod network;
pub mod pipeline;
pub mod retry;
pub mod score;
pub mod storage;

pub use chart::{Chart, Note, NoteDirection, SongInfo};
pub use config::{Config, Endpoints, FetchSettings, RunMode};
pub use error::{Error, Result};
pub use fetch::{fetch_charts, fetch_note_sequences, fetch_song_list, merge_charts};
pub use network::{FetchBytes, HttpClient};
pub use pipeline::{RunSummary, acquire_charts, score_charts};
pub use score::{DifficultyScorer, PlaceholderScorer, compute_difficulties};
pub use storage::{load_charts, save_charts};
