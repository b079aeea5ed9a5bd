//! Character offsets of the fixed-column `ATOM`/`HETATM` layout.
//!
//! Ranges are 0-indexed and half-open, so `SERIAL = 6..11` covers the 1-indexed
//! columns 7-11 of the format description.

use std::ops::Range;

/// Minimum length of a line that can hold a complete record (through the element field).
pub const MIN_LINE_LENGTH: usize = 78;

pub const RECORD_NAME: Range<usize> = 0..6;
pub const SERIAL: Range<usize> = 6..11;
pub const ATOM_NAME_PART1: Range<usize> = 12..14;
pub const ATOM_NAME_PART2: Range<usize> = 14..16;
pub const ALT_LOC: Range<usize> = 16..17;
pub const RESIDUE_NAME: Range<usize> = 17..20;
pub const CHAIN_ID: Range<usize> = 21..22;
pub const RESIDUE_SEQ: Range<usize> = 22..26;
pub const INSERTION_CODE: Range<usize> = 26..27;
pub const X: Range<usize> = 30..38;
pub const Y: Range<usize> = 38..46;
pub const Z: Range<usize> = 46..54;
pub const OCCUPANCY: Range<usize> = 54..60;
pub const TEMP_FACTOR: Range<usize> = 60..66;
pub const SEG_ID: Range<usize> = 72..76;
pub const ELEMENT: Range<usize> = 76..78;
pub const CHARGE: Range<usize> = 78..80;

/// Returns the trimmed contents of `columns`, clamped to the end of the line.
///
/// Columns count characters, not bytes, so a multi-byte character in an earlier
/// field does not shift the ones after it. Columns past the end of the line yield
/// an empty string.
pub(crate) fn slice_and_trim(line: &str, columns: Range<usize>) -> &str {
    if line.is_ascii() {
        let end = columns.end.min(line.len());
        let start = columns.start.min(end);
        return line[start..end].trim();
    }

    let mut offsets = line
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(line.len()));
    let Some(start) = offsets.nth(columns.start) else {
        return "";
    };
    let end = match columns.len() {
        0 => start,
        len => offsets.nth(len - 1).unwrap_or(line.len()),
    };
    line[start..end].trim()
}
