use serde_json::Value;
use tracing::warn;

use crate::chart::Note;
use crate::error::{Error, Result};

/// Parse a raw beatbox payload into notes.
///
/// The payload itself must be a JSON array; anything else fails. Individual
/// entries are validated one by one and bad ones are dropped with a warning.
pub fn parse_note_sequence(bytes: &[u8]) -> Result<Vec<Note>> {
    let raw_notes: Vec<Value> = serde_json::from_slice(bytes)
        .map_err(|e| Error::Parse(format!("Beatbox payload is not a JSON array: {}", e)))?;

    let notes = raw_notes
        .iter()
        .filter_map(|raw_note| match parse_note(raw_note) {
            Ok(note) => Some(note),
            Err(e) => {
                warn!("Ignored bad note {}: {}", raw_note, e);
                None
            }
        })
        .collect();

    Ok(notes)
}

/// Parse every fetched payload, keeping positions aligned with `levels`.
///
/// A missing payload becomes an empty note sequence.
pub fn parse_note_sequences(
    levels: &[u32],
    payloads: &[Option<Vec<u8>>],
) -> Result<Vec<Vec<Note>>> {
    payloads
        .iter()
        .enumerate()
        .map(|(index, payload)| match payload {
            Some(bytes) => parse_note_sequence(bytes).map_err(|e| match (e, levels.get(index)) {
                (Error::Parse(msg), Some(level)) => Error::Parse(format!("Level {}: {}", level, msg)),
                (e, _) => e,
            }),
            None => {
                if let Some(level) = levels.get(index) {
                    warn!("No beatbox data for level {}, using an empty chart", level);
                }
                Ok(Vec::new())
            }
        })
        .collect()
}

fn parse_note(raw: &Value) -> Result<Note> {
    let pair = raw
        .as_array()
        .ok_or_else(|| Error::Parse("note is not an array".to_string()))?;

    let [code, frame] = pair.as_slice() else {
        return Err(Error::Parse(format!(
            "expected [direction, frame], got {} elements",
            pair.len()
        )));
    };

    let code = code
        .as_str()
        .ok_or_else(|| Error::Parse(format!("direction {} is not a string", code)))?;
    let frame = frame
        .as_u64()
        .and_then(|f| u32::try_from(f).ok())
        .ok_or_else(|| Error::Parse(format!("frame {} is not a non-negative integer", frame)))?;

    Note::from_code(code, frame)
}
