use crate::chart::{Note, SongInfo};

/// A song paired with its notes in playback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    pub info: SongInfo,
    pub notes: Vec<Note>,
}

impl Chart {
    pub fn new(info: SongInfo, notes: Vec<Note>) -> Self {
        Self { info, notes }
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }
}
