use super::columns::{self, MIN_LINE_LENGTH};
use std::fmt;
use std::ops::Range;
use thiserror::Error;

/// Integer-valued fields of a coordinate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerField {
    Serial,
    ResidueSeq,
}

impl IntegerField {
    pub fn name(self) -> &'static str {
        match self {
            IntegerField::Serial => "serial",
            IntegerField::ResidueSeq => "residue_seq",
        }
    }

    pub fn columns(self) -> Range<usize> {
        match self {
            IntegerField::Serial => columns::SERIAL,
            IntegerField::ResidueSeq => columns::RESIDUE_SEQ,
        }
    }
}

impl fmt::Display for IntegerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.columns();
        write!(
            f,
            "'{}' (columns {}-{})",
            self.name(),
            range.start + 1,
            range.end
        )
    }
}

/// Real-valued fields of a coordinate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealField {
    X,
    Y,
    Z,
    Occupancy,
    TempFactor,
}

impl RealField {
    pub fn name(self) -> &'static str {
        match self {
            RealField::X => "x",
            RealField::Y => "y",
            RealField::Z => "z",
            RealField::Occupancy => "occupancy",
            RealField::TempFactor => "temp_factor",
        }
    }

    pub fn columns(self) -> Range<usize> {
        match self {
            RealField::X => columns::X,
            RealField::Y => columns::Y,
            RealField::Z => columns::Z,
            RealField::Occupancy => columns::OCCUPANCY,
            RealField::TempFactor => columns::TEMP_FACTOR,
        }
    }
}

impl fmt::Display for RealField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.columns();
        write!(
            f,
            "'{}' (columns {}-{})",
            self.name(),
            range.start + 1,
            range.end
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Line is too short for an ATOM/HETATM record ({length} chars, need at least {min})", min = MIN_LINE_LENGTH)]
    RecordTooShort { length: usize },

    #[error("Invalid record type '{found}' in columns 1-6 (expected ATOM or HETATM)")]
    InvalidRecordType { found: String },

    #[error("Field {field} is not numeric (value: '{value}')")]
    FieldNotNumeric { field: IntegerField, value: String },

    #[error("Invalid number in field {field} (value: '{value}')")]
    CoordinateParseError { field: RealField, value: String },

    #[error("Atom name '{name}' is too long ({length} chars, at most 4 allowed)")]
    AtomNameTooLong { name: String, length: usize },
}
