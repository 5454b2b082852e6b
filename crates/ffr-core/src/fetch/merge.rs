use crate::chart::{Chart, Note, SongInfo};
use crate::error::{Error, Result};

/// Pair song infos with note sequences by position.
///
/// Both inputs must have the same length; no chart is built otherwise.
pub fn merge_charts(song_infos: Vec<SongInfo>, note_sequences: Vec<Vec<Note>>) -> Result<Vec<Chart>> {
    if song_infos.len() != note_sequences.len() {
        return Err(Error::CountMismatch {
            song_infos: song_infos.len(),
            note_sequences: note_sequences.len(),
        });
    }

    Ok(song_infos
        .into_iter()
        .zip(note_sequences)
        .map(|(info, notes)| Chart::new(info, notes))
        .collect())
}
