//! Fixed-width table extraction.
//!
//! Radio Mobile tables carry no delimiters; column boundaries are wherever
//! the column headers start in the header line. The caller declares the
//! header texts in left-to-right visual order and every following row is
//! sliced at those offsets.
//!
//! Offsets are character positions, not byte positions: location cells
//! contain multi-byte characters such as `°` and a byte-offset slice could
//! land inside one.

use super::sections::keyify;
use crate::{Error, Result};

/// One extracted row: field keys zipped with trimmed cell values.
#[derive(Debug, Clone)]
pub struct TableRow {
    cells: Vec<(String, String)>,
}

impl TableRow {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Fetch a cell that the caller's field list guarantees to exist.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| Error::table(key))
    }

    /// Value of the leftmost column
    pub fn first_cell(&self) -> &str {
        self.cells.first().map(|(_, v)| v.as_str()).unwrap_or("")
    }
}

/// Extract rows from a fixed-width table, keyifying every field name.
///
/// `lines[0]` is the header row; each field's first occurrence in it fixes
/// that column's start offset. Blank lines are skipped; each remaining
/// line yields one row. The last field runs to the end of the line.
///
/// Caller contract: `fields` must be given in left-to-right visual column
/// order. Out-of-order fields silently produce swapped slices; this is not
/// checked at runtime.
pub fn extract(lines: &[String], fields: &[&str]) -> Result<Vec<TableRow>> {
    extract_with(lines, fields, |_| true)
}

/// Like [`extract`], with a per-field predicate deciding whether a field
/// name is normalized via [`keyify`] or kept verbatim as the row key.
pub fn extract_with(
    lines: &[String],
    fields: &[&str],
    keyify_field: impl Fn(&str) -> bool,
) -> Result<Vec<TableRow>> {
    let Some(header) = lines.first() else {
        return Err(Error::format("table", "missing header line"));
    };

    let mut columns = Vec::with_capacity(fields.len());
    for &field in fields {
        let byte_offset = header.find(field).ok_or_else(|| Error::table(field))?;
        let char_offset = header[..byte_offset].chars().count();
        let key = if keyify_field(field) {
            keyify(field)
        } else {
            field.to_string()
        };
        columns.push((key, char_offset));
    }

    let mut rows = Vec::new();
    for line in &lines[1..] {
        if line.trim().is_empty() {
            continue;
        }
        let mut cells = Vec::with_capacity(columns.len());
        for (i, (key, start)) in columns.iter().enumerate() {
            let end = columns.get(i + 1).map(|(_, next)| *next);
            let value = char_slice(line, *start, end).trim().to_string();
            cells.push((key.clone(), value));
        }
        rows.push(TableRow { cells });
    }
    Ok(rows)
}

/// Slice a line between character offsets, clamping to the line length.
fn char_slice(line: &str, start: usize, end: Option<usize>) -> &str {
    let byte_at = |char_offset: usize| {
        line.char_indices()
            .nth(char_offset)
            .map(|(byte, _)| byte)
            .unwrap_or(line.len())
    };
    let from = byte_at(start);
    let to = end.map(byte_at).unwrap_or(line.len());
    &line[from..to.max(from)]
}
