use std::path::PathBuf;

use crate::config::{Endpoints, FetchSettings};
use crate::error::{Error, Result};

/// Where the chart collection comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Download from the remote service, optionally saving the result to disk
    Fetch { persist: bool },
    /// Restore a previously saved chart file
    Load,
}

impl RunMode {
    /// Validate the operating-mode flags.
    ///
    /// Persisting is only meaningful when fetching.
    pub fn from_flags(download: bool, save: bool) -> Result<Self> {
        match (download, save) {
            (true, persist) => Ok(RunMode::Fetch { persist }),
            (false, false) => Ok(RunMode::Load),
            (false, true) => Err(Error::Configuration(
                "saving charts is only possible when downloading charts".to_string(),
            )),
        }
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, RunMode::Fetch { .. })
    }
}

/// Fully validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: RunMode,
    /// Present if and only if `mode` is `Fetch`
    pub endpoints: Option<Endpoints>,
    pub charts_path: PathBuf,
    pub fetch: FetchSettings,
}

impl Config {
    /// Build a configuration from caller-supplied flags and endpoint values.
    ///
    /// Mode flags are checked first, then endpoints (fetch mode only).
    pub fn from_flags(
        download: bool,
        save: bool,
        songlist_url: Option<String>,
        beatbox_url: Option<String>,
        charts_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let mode = RunMode::from_flags(download, save)?;
        let endpoints = if mode.is_fetch() {
            Some(Endpoints::new(songlist_url, beatbox_url)?)
        } else {
            None
        };

        Ok(Self {
            mode,
            endpoints,
            charts_path: charts_path.into(),
            fetch: FetchSettings::default(),
        })
    }

    pub fn with_fetch_settings(mut self, fetch: FetchSettings) -> Self {
        self.fetch = fetch;
        self
    }
}
