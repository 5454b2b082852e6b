use std::time::Duration;

use crate::config::fetch::{BATCH_SIZE, COOLDOWN};
use crate::retry::FixedDelay;

/// Tunables for the note-sequence fetch.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub batch_size: usize,
    pub cooldown: Duration,
    pub retry: FixedDelay,
}

impl FetchSettings {
    pub fn new(batch_size: usize, cooldown: Duration, retry: FixedDelay) -> Self {
        Self {
            batch_size: batch_size.max(1),
            cooldown,
            retry,
        }
    }
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self::new(BATCH_SIZE, COOLDOWN, FixedDelay::default())
    }
}
