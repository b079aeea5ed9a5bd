use super::Record;
use super::error::RecordError;
use std::fmt;

const MAX_ATOM_NAME_LENGTH: usize = 4;
const COORDINATE_WIDTH: usize = 8;
const COORDINATE_DECIMALS: usize = 3;
const METRIC_WIDTH: usize = 6;
const METRIC_DECIMALS: usize = 2;

impl Record {
    /// Replaces the atom name, re-splitting it over columns 13-14 and 15-16.
    ///
    /// Names of at most two characters go entirely into the right-justified first
    /// sub-field and clear the second. Longer names keep their first two characters
    /// in the first sub-field and the rest in the left-justified second one.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::AtomNameTooLong`] for names longer than four
    /// characters; the record is left unchanged.
    pub fn set_atom_name(&mut self, name: &str) -> Result<(), RecordError> {
        let length = name.chars().count();
        if length > MAX_ATOM_NAME_LENGTH {
            return Err(RecordError::AtomNameTooLong {
                name: name.to_string(),
                length,
            });
        }

        if length <= 2 {
            self.atom_name_part1 = name.trim().to_string();
            self.atom_name_part2.clear();
        } else {
            let split = name
                .char_indices()
                .nth(2)
                .map_or(name.len(), |(index, _)| index);
            self.atom_name_part1 = name[..split].trim().to_string();
            self.atom_name_part2 = name[split..].trim().to_string();
        }
        Ok(())
    }

    /// Builds the canonical fixed-column line from the current field values.
    ///
    /// Every field is written at its fixed position with the format's own padding:
    /// coordinates as `%8.3f`, occupancy and temperature factor as `%6.2f`, the
    /// serial right-aligned in five columns. A real value too wide for its field
    /// at that precision is written with fewer decimals, so no field ever spills
    /// into the next. The line is 78 columns long, or 80 when the record carries a
    /// charge.
    pub fn serialize(&self) -> String {
        let mut line = format!(
            "{:<6}{:>5} {}{:<1}{:>3} {:<1}{:>4}{:<1}   {:>8}{:>8}{:>8}{:>6}{:>6}      {:<4}{:>2}",
            self.record_name.as_str(),
            self.serial,
            self.atom_name_full(),
            self.alt_loc,
            self.residue_name,
            self.chain_id,
            self.residue_seq,
            self.insertion_code,
            fixed_width_real(self.x, COORDINATE_WIDTH, COORDINATE_DECIMALS),
            fixed_width_real(self.y, COORDINATE_WIDTH, COORDINATE_DECIMALS),
            fixed_width_real(self.z, COORDINATE_WIDTH, COORDINATE_DECIMALS),
            fixed_width_real(self.occupancy, METRIC_WIDTH, METRIC_DECIMALS),
            fixed_width_real(self.temp_factor, METRIC_WIDTH, METRIC_DECIMALS),
            self.seg_id,
            self.element,
        );
        if !self.charge.is_empty() {
            line.push_str(&format!("{:>2}", self.charge));
        }
        line
    }
}

/// Renders `value` in at most `width` characters.
///
/// The preferred form has `decimals` digits after the point. When that does not
/// fit, the first candidate that fits and still parses back to exactly `value`
/// wins: fewer decimals, the shortest round-trip form, then scientific notation.
/// Only a value with no exact form that narrow is rounded further.
fn fixed_width_real(value: f64, width: usize, decimals: usize) -> String {
    let preferred = format!("{:.*}", decimals, value);
    if preferred.len() <= width {
        return preferred;
    }

    let exact = (0..decimals)
        .rev()
        .map(|d| format!("{:.*}", d, value))
        .chain([value.to_string(), format!("{:e}", value)])
        .find(|s| s.len() <= width && s.parse::<f64>().is_ok_and(|v| v == value));
    if let Some(s) = exact {
        return s;
    }

    (0..decimals)
        .rev()
        .map(|d| format!("{:.*}", d, value))
        .chain((0..=decimals).rev().map(|d| format!("{:.*e}", d, value)))
        .find(|s| s.len() <= width)
        .unwrap_or_else(|| format!("{:.0e}", value))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
