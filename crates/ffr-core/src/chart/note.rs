use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Arrow direction of a note, encoded externally as a single character.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
pub enum NoteDirection {
    #[strum(serialize = "L")]
    #[serde(rename = "L")]
    Left,
    #[strum(serialize = "D")]
    #[serde(rename = "D")]
    Down,
    #[strum(serialize = "U")]
    #[serde(rename = "U")]
    Up,
    #[strum(serialize = "R")]
    #[serde(rename = "R")]
    Right,
}

impl NoteDirection {
    pub const ALL: [NoteDirection; 4] = [Self::Left, Self::Down, Self::Up, Self::Right];

    /// Parse a direction from its external code (`L`, `D`, `U`, `R`).
    pub fn from_code(code: &str) -> Result<Self> {
        Self::from_str(code)
            .map_err(|_| Error::Parse(format!("Unknown note direction code {:?}", code)))
    }

    pub fn code(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for NoteDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single note: a direction hit at a frame offset from the chart start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub direction: NoteDirection,
    pub frame: u32,
}

impl Note {
    pub fn new(direction: NoteDirection, frame: u32) -> Self {
        Self { direction, frame }
    }

    pub fn from_code(code: &str, frame: u32) -> Result<Self> {
        Ok(Self::new(NoteDirection::from_code(code)?, frame))
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.direction, self.frame)
    }
}
