//! The decoded `ATOM`/`HETATM` coordinate record.
//!
//! A [`Record`] is created only by [`Record::parse`], changed only through
//! [`Record::set_atom_name`], and turned back into a fixed-column line by
//! [`Record::serialize`]. The atom name is held as the two justified sub-fields
//! of columns 13-14 and 15-16; the combined name is always derived from them, so
//! the sub-fields and the serialized line can never disagree.

mod classify;
pub mod columns;
mod error;
mod parser;
mod serializer;

pub use error::{IntegerField, RealField, RecordError};

use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordName {
    Atom,
    Hetatm,
}

impl RecordName {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordName::Atom => "ATOM",
            RecordName::Hetatm => "HETATM",
        }
    }
}

impl FromStr for RecordName {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ATOM" => Ok(RecordName::Atom),
            "HETATM" => Ok(RecordName::Hetatm),
            other => Err(RecordError::InvalidRecordType {
                found: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    record_name: RecordName,     // Columns 1-6
    serial: u32,                 // Columns 7-11
    atom_name_part1: String,     // Columns 13-14, right-justified
    atom_name_part2: String,     // Columns 15-16, left-justified
    alt_loc: String,             // Column 17
    residue_name: String,        // Columns 18-20
    chain_id: String,            // Column 22
    residue_seq: u32,            // Columns 23-26
    insertion_code: String,      // Column 27
    x: f64,                      // Columns 31-38
    y: f64,                      // Columns 39-46
    z: f64,                      // Columns 47-54
    occupancy: f64,              // Columns 55-60
    temp_factor: f64,            // Columns 61-66
    seg_id: String,              // Columns 73-76
    element: String,             // Columns 77-78
    charge: String,              // Columns 79-80, empty on 78-column lines
    raw_line: String,            // The line this record was parsed from
}

impl Record {
    pub fn record_name(&self) -> RecordName {
        self.record_name
    }

    pub fn serial(&self) -> u32 {
        self.serial
    }

    /// The 4-column atom-name field exactly as it is written to columns 13-16.
    pub fn atom_name_full(&self) -> String {
        format!("{:>2}{:<2}", self.atom_name_part1, self.atom_name_part2)
    }

    /// The atom name with its column padding removed (e.g. `"CA"`, `"HG21"`).
    pub fn atom_name(&self) -> String {
        self.atom_name_full().trim().to_string()
    }

    pub fn alt_loc(&self) -> &str {
        &self.alt_loc
    }

    pub fn residue_name(&self) -> &str {
        &self.residue_name
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn residue_seq(&self) -> u32 {
        self.residue_seq
    }

    pub fn insertion_code(&self) -> &str {
        &self.insertion_code
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn position(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn occupancy(&self) -> f64 {
        self.occupancy
    }

    pub fn temp_factor(&self) -> f64 {
        self.temp_factor
    }

    pub fn seg_id(&self) -> &str {
        &self.seg_id
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn charge(&self) -> &str {
        &self.charge
    }

    /// The original input line, untouched by later mutation.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// File name used when the residue owning this record is written on its own,
    /// e.g. `HEM-0201.pdb`.
    pub fn fragment_file_name(&self) -> String {
        format!("{}-{:04}.pdb", self.residue_name, self.residue_seq)
    }
}

impl FromStr for Record {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Record::parse(s)
    }
}


#[cfg(test)]
mod tests {
    use super::test_lines::*;
    use super::*;

    #[test]
    fn record_name_parses_both_record_types_and_trims() {
        assert_eq!("ATOM".parse::<RecordName>(), Ok(RecordName::Atom));
        assert_eq!("HETATM".parse::<RecordName>(), Ok(RecordName::Hetatm));
        assert_eq!("ATOM  ".parse::<RecordName>(), Ok(RecordName::Atom));
    }

    #[test]
    fn record_name_rejects_other_record_types() {
        assert_eq!(
            "HEADER".parse::<RecordName>(),
            Err(RecordError::InvalidRecordType {
                found: "HEADER".into()
            })
        );
        assert!("atom".parse::<RecordName>().is_err());
    }

    #[test]
    fn record_name_display_matches_column_text() {
        assert_eq!(RecordName::Atom.to_string(), "ATOM");
        assert_eq!(RecordName::Hetatm.to_string(), "HETATM");
    }

    #[test]
    fn atom_name_is_derived_from_justified_sub_fields() {
        let record = Record::parse(MET_CA).unwrap();
        assert_eq!(record.atom_name_full(), " CA ");
        assert_eq!(record.atom_name(), "CA");

        let record = Record::parse(THR_HG21).unwrap();
        assert_eq!(record.atom_name_full(), "HG21");
        assert_eq!(record.atom_name(), "HG21");
    }

    #[test]
    fn position_collects_coordinates_into_a_point() {
        let record = Record::parse(MET_N).unwrap();
        assert_eq!(record.position(), Point3::new(38.428, 16.717, 24.392));
    }

    #[test]
    fn fragment_file_name_zero_pads_residue_sequence() {
        let record = Record::parse(HEME_IRON).unwrap();
        assert_eq!(record.fragment_file_name(), "HEM-0201.pdb");

        let record = Record::parse(MET_N).unwrap();
        assert_eq!(record.fragment_file_name(), "MET-0001.pdb");
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let record: Record = MET_N.parse().unwrap();
        assert_eq!(record, Record::parse(MET_N).unwrap());
        assert!("END".parse::<Record>().is_err());
    }
}
