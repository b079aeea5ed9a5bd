use super::{Record, RecordName};
use crate::core::chemistry::elements::{is_ion_element, is_removable_element, is_water_residue};

/// Chemical classification of a record, computed from its current fields on
/// every call.
impl Record {
    pub fn is_atom(&self) -> bool {
        self.record_name == RecordName::Atom
    }

    pub fn is_hetatm(&self) -> bool {
        self.record_name == RecordName::Hetatm
    }

    /// Every heteroatom is a cofactor candidate.
    pub fn is_cofactor(&self) -> bool {
        self.is_hetatm()
    }

    pub fn is_ion(&self) -> bool {
        is_ion_element(&self.element)
    }

    /// Water and heavy-ion contaminants, which a cleanup pass removes.
    pub fn is_removable(&self) -> bool {
        is_removable_element(&self.element) || is_water_residue(&self.residue_name)
    }

    /// An ion whose residue label does not match its element symbol.
    pub fn needs_residue_rename(&self) -> bool {
        self.is_ion() && self.residue_name != self.element
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_lines::*;
    use super::*;

    #[test]
    fn standard_residue_atom_is_neither_ion_nor_removable() {
        let record = Record::parse(MET_N).unwrap();
        assert!(record.is_atom());
        assert!(!record.is_hetatm());
        assert!(!record.is_cofactor());
        assert!(!record.is_ion());
        assert!(!record.is_removable());
        assert!(!record.needs_residue_rename());
    }

    #[test]
    fn every_hetatm_is_a_cofactor_candidate() {
        for line in [SODIUM, WATER, GOLD, HEME_IRON, HEME_CARBON] {
            let record = Record::parse(line).unwrap();
            assert!(record.is_hetatm());
            assert!(record.is_cofactor());
            assert!(!record.is_atom());
        }
    }

    #[test]
    fn sodium_is_an_ion_with_a_matching_residue_label() {
        let record = Record::parse(SODIUM).unwrap();
        assert!(record.is_ion());
        assert!(!record.is_removable());
        assert!(!record.needs_residue_rename());
    }

    #[test]
    fn ion_inside_another_residue_needs_residue_rename() {
        let record = Record::parse(SODIUM_IN_SOLVENT).unwrap();
        assert!(record.is_ion());
        assert!(record.needs_residue_rename());

        let record = Record::parse(HEME_IRON).unwrap();
        assert!(record.is_ion());
        assert!(record.needs_residue_rename());
    }

    #[test]
    fn gold_is_removable_regardless_of_residue_name() {
        let record = Record::parse(GOLD).unwrap();
        assert!(record.is_removable());
        assert!(!record.is_ion());

        let line = GOLD.replace(" AU B 501", "LIG B 501");
        let record = Record::parse(&line).unwrap();
        assert_eq!(record.residue_name(), "LIG");
        assert!(record.is_removable());
    }

    #[test]
    fn water_is_removable_regardless_of_element() {
        let record = Record::parse(WATER).unwrap();
        assert_eq!(record.element(), "O");
        assert!(record.is_removable());

        let line = format!("{}NA", &WATER[..76]);
        let record = Record::parse(&line).unwrap();
        assert_eq!(record.element(), "NA");
        assert!(record.is_removable());
    }

    #[test]
    fn classification_follows_atom_name_mutation_state() {
        let mut record = Record::parse(SODIUM_IN_SOLVENT).unwrap();
        record.set_atom_name("X").unwrap();
        assert!(record.is_ion());
        assert!(record.needs_residue_rename());
    }
}
