use crate::config::env::{BEATBOX_URL_VAR, SONGLIST_URL_VAR};
use crate::error::{Error, Result};

/// Placeholder substituted with a song level in the beatbox URL template.
pub const LEVEL_PLACEHOLDER: &str = "{level}";

/// Remote endpoints required in fetch mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub songlist_url: String,
    /// Beatbox URL template. The level replaces `{level}` when present,
    /// otherwise it is appended.
    pub beatbox_url: String,
}

impl Endpoints {
    pub fn new(songlist_url: Option<String>, beatbox_url: Option<String>) -> Result<Self> {
        Ok(Self {
            songlist_url: require(songlist_url, SONGLIST_URL_VAR)?,
            beatbox_url: require(beatbox_url, BEATBOX_URL_VAR)?,
        })
    }

    pub fn beatbox_url_for(&self, level: u32) -> String {
        if self.beatbox_url.contains(LEVEL_PLACEHOLDER) {
            self.beatbox_url
                .replace(LEVEL_PLACEHOLDER, &level.to_string())
        } else {
            format!("{}{}", self.beatbox_url, level)
        }
    }
}

fn require(value: Option<String>, var: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(Error::Configuration(format!("{} is not set", var))),
    }
}
