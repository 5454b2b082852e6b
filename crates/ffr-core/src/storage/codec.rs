//! Chart collection encoding.
//!
//! Each chart is stored as `[[level, name, difficulty], [[direction, frame], ...]]`
//! inside one top-level JSON array; the JSON text is then zlib-compressed.
//! The layout is positional and carries no version tag, so field order must
//! never change.
//!
//! Decoding is strict: any arity, type or direction-code violation fails the
//! whole payload.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::chart::{Chart, Note, NoteDirection, SongInfo};
use crate::error::{Error, Result};

type SongInfoRecord<S> = (u32, S, u32);
type NoteRecord = (NoteDirection, u32);
type ChartRecord<S> = (SongInfoRecord<S>, Vec<NoteRecord>);

/// Serialize charts to the positional JSON text.
pub fn to_json(charts: &[Chart]) -> Result<String> {
    let records: Vec<ChartRecord<&str>> = charts
        .iter()
        .map(|chart| {
            let info = (chart.info.level, chart.info.name.as_str(), chart.info.difficulty);
            let notes = chart
                .notes
                .iter()
                .map(|note| (note.direction, note.frame))
                .collect();
            (info, notes)
        })
        .collect();

    Ok(serde_json::to_string(&records)?)
}

/// Parse the positional JSON text back into charts.
pub fn from_json(text: &str) -> Result<Vec<Chart>> {
    let records: Vec<ChartRecord<String>> = serde_json::from_str(text)
        .map_err(|e| Error::Parse(format!("Malformed chart data: {}", e)))?;

    Ok(records
        .into_iter()
        .map(|((level, name, difficulty), notes)| {
            Chart::new(
                SongInfo {
                    level,
                    name,
                    difficulty,
                },
                notes
                    .into_iter()
                    .map(|(direction, frame)| Note::new(direction, frame))
                    .collect(),
            )
        })
        .collect())
}

/// Encode charts into the compressed on-disk payload.
pub fn encode(charts: &[Chart]) -> Result<Vec<u8>> {
    let text = to_json(charts)?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    Ok(encoder.finish()?)
}

/// Decode a compressed payload produced by [`encode`].
///
/// Returns `CorruptData` if decompression fails and `Parse` if the
/// decompressed text does not match the chart layout.
pub fn decode(bytes: &[u8]) -> Result<Vec<Chart>> {
    let mut text = String::new();
    ZlibDecoder::new(bytes)
        .read_to_string(&mut text)
        .map_err(|e| Error::CorruptData(format!("Decompression failed: {}", e)))?;

    from_json(&text)
}
