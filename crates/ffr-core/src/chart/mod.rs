//! Chart-related types and data structures.
//!
//! This module contains the in-memory domain model:
//! - `SongInfo` - song metadata from the song list
//! - `NoteDirection`, `Note` - a single arrow in a beatbox
//! - `Chart` - song metadata paired with its ordered notes

mod chart;
mod note;
mod song;

pub use chart::*;
pub use note::*;
pub use song::*;
