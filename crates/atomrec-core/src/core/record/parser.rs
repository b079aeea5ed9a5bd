use super::columns::{self, MIN_LINE_LENGTH, slice_and_trim};
use super::error::{IntegerField, RealField, RecordError};
use super::{Record, RecordName};

impl Record {
    /// Parses one fixed-column `ATOM`/`HETATM` line.
    ///
    /// The checks run in a fixed order and the first failure is returned:
    /// line length, record type, the two integer fields, then the five real
    /// fields. String fields are stored with their column padding trimmed.
    /// Characters past column 80 are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::RecordTooShort`], [`RecordError::InvalidRecordType`],
    /// [`RecordError::FieldNotNumeric`] or [`RecordError::CoordinateParseError`]
    /// for the first gate the line fails.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let length = line.chars().count();
        if length < MIN_LINE_LENGTH {
            return Err(RecordError::RecordTooShort { length });
        }

        let record_name: RecordName = slice_and_trim(line, columns::RECORD_NAME).parse()?;

        let serial = parse_integer(line, IntegerField::Serial)?;
        let residue_seq = parse_integer(line, IntegerField::ResidueSeq)?;

        let x = parse_real(line, RealField::X)?;
        let y = parse_real(line, RealField::Y)?;
        let z = parse_real(line, RealField::Z)?;
        let occupancy = parse_real(line, RealField::Occupancy)?;
        let temp_factor = parse_real(line, RealField::TempFactor)?;

        let text = |range| slice_and_trim(line, range).to_string();

        Ok(Self {
            record_name,
            serial,
            atom_name_part1: text(columns::ATOM_NAME_PART1),
            atom_name_part2: text(columns::ATOM_NAME_PART2),
            alt_loc: text(columns::ALT_LOC),
            residue_name: text(columns::RESIDUE_NAME),
            chain_id: text(columns::CHAIN_ID),
            residue_seq,
            insertion_code: text(columns::INSERTION_CODE),
            x,
            y,
            z,
            occupancy,
            temp_factor,
            seg_id: text(columns::SEG_ID),
            element: text(columns::ELEMENT),
            charge: text(columns::CHARGE),
            raw_line: line.to_string(),
        })
    }
}

fn parse_integer(line: &str, field: IntegerField) -> Result<u32, RecordError> {
    let value = slice_and_trim(line, field.columns());
    let not_numeric = || RecordError::FieldNotNumeric {
        field,
        value: value.to_string(),
    };

    let digits = value.strip_prefix('+').unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_numeric());
    }
    digits.parse().map_err(|_| not_numeric())
}

fn parse_real(line: &str, field: RealField) -> Result<f64, RecordError> {
    let value = slice_and_trim(line, field.columns());
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RecordError::CoordinateParseError {
            field,
            value: value.to_string(),
        }),
    }
}
