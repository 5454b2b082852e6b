//! Configuration for a pipeline run.
//!
//! This module contains:
//! - `Endpoints` - remote song list and beatbox URLs
//! - `RunMode` - fetch-from-network vs load-from-disk
//! - `Config` - the validated combination of both, built before any I/O
//! - `FetchSettings` - batching and retry tunables
//! - Fetch, retry, HTTP and storage constants

mod endpoints;
mod mode;
mod settings;

pub use endpoints::*;
pub use mode::*;
pub use settings::*;

/// Note-sequence fetch batching.
///
/// At most `BATCH_SIZE` requests are in flight; the next batch starts
/// `COOLDOWN` after the previous one fully completes.
pub mod fetch {
    use std::time::Duration;

    /// Number of concurrent requests per batch.
    pub const BATCH_SIZE: usize = 50;

    /// Pause between two consecutive batches.
    pub const COOLDOWN: Duration = Duration::from_secs(5);
}

/// Per-request retry configuration.
pub mod retry {
    use std::time::Duration;

    /// Maximum number of attempts for a single HTTP GET.
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Fixed back-off between attempts.
    pub const DELAY: Duration = Duration::from_secs(1);
}

pub mod http {
    use std::time::Duration;

    pub const TIMEOUT: Duration = Duration::from_secs(30);
}

pub mod storage {
    /// Default chart file, relative to the working directory.
    pub const CHARTS_FILE_NAME: &str = "charts.txt";
}

/// Environment variables holding the remote endpoints.
pub mod env {
    pub const SONGLIST_URL_VAR: &str = "FFR_SONGLIST_URL";
    pub const BEATBOX_URL_VAR: &str = "FFR_BEATBOX_URL";
}
