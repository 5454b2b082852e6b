use encoding_rs::WINDOWS_1252;

use crate::chart::SongInfo;
use crate::error::{Error, Result};

// Column layout of the remote song list
const LEVEL_COLUMN: usize = 0;
const NAME_COLUMN: usize = 2;
const DIFFICULTY_COLUMN: usize = 4;
const MIN_COLUMNS: usize = DIFFICULTY_COLUMN + 1;

/// Parse the song list table.
///
/// The payload is latin-1 text (decoded with the WHATWG windows-1252 mapping),
/// one comma-separated record per song after a header record. Any malformed
/// record fails the whole list.
pub fn parse_song_list(bytes: &[u8]) -> Result<Vec<SongInfo>> {
    let text = WINDOWS_1252.decode_without_bom_handling(bytes).0;

    split_records(&text)?
        .into_iter()
        .skip(1)
        .map(|(row, fields)| parse_song_row(row, &fields))
        .collect()
}

fn parse_song_row(row: usize, fields: &[String]) -> Result<SongInfo> {
    if fields.len() < MIN_COLUMNS {
        return Err(Error::Parse(format!(
            "Song list row {}: expected at least {} columns, got {}",
            row,
            MIN_COLUMNS,
            fields.len()
        )));
    }

    Ok(SongInfo {
        level: parse_number(row, "level", &fields[LEVEL_COLUMN])?,
        name: fields[NAME_COLUMN].clone(),
        difficulty: parse_number(row, "difficulty", &fields[DIFFICULTY_COLUMN])?,
    })
}

fn parse_number(row: usize, column: &str, field: &str) -> Result<u32> {
    field.trim().parse().map_err(|_| {
        Error::Parse(format!(
            "Song list row {}: invalid {} {:?}",
            row, column, field
        ))
    })
}

/// Split CSV text into records, each tagged with the line it starts on.
///
/// A `"` opens a quoted field only at the start of a field; elsewhere it is
/// literal. Inside quotes `""` is an escaped quote, and a line break continues
/// the record (the break itself is dropped). Blank lines between records are
/// skipped.
fn split_records(text: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut record_line = 0;

    for (index, line) in text.lines().enumerate() {
        if !in_quotes {
            if line.trim().is_empty() {
                continue;
            }
            record_line = index + 1;
        }

        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes => {
                    if chars.peek() == Some(&'"') {
                        field.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                }
                '"' if at_field_start => {
                    in_quotes = true;
                    at_field_start = false;
                }
                ',' if !in_quotes => {
                    fields.push(std::mem::take(&mut field));
                    at_field_start = true;
                }
                _ => {
                    field.push(c);
                    at_field_start = false;
                }
            }
        }

        if !in_quotes {
            fields.push(std::mem::take(&mut field));
            records.push((record_line, std::mem::take(&mut fields)));
            at_field_start = true;
        }
    }

    if in_quotes {
        return Err(Error::Parse(format!(
            "Song list row {}: unterminated quoted field",
            record_line
        )));
    }

    Ok(records)
}
