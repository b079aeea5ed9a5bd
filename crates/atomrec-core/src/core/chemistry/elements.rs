use phf::{Set, phf_set};

/// Residue name used for crystallographic water.
pub const WATER_RESIDUE_NAME: &str = "HOH";

/// Element codes recognized as monatomic ions.
pub static ION_ELEMENTS: Set<&'static str> = phf_set! {
    "AG", "AL", "BE", "CA", "CD", "CL", "CO", "CR", "CU", "FE", "GA", "HE",
    "IN", "LI", "MG", "MN", "NE", "NI", "PB", "K", "RH", "RB", "SC", "SN",
    "NA", "SR", "TI", "V2", "V3", "Y3", "ZN", "SE", "BR", "P", "S", "MO",
};

/// Element codes of heavy-ion contaminants that a cleanup pass strips out.
pub static REMOVABLE_ELEMENTS: Set<&'static str> = phf_set! {
    "AU", "BA", "BI", "CE", "CS", "DY", "ER", "EU", "GD", "HG", "HO", "LA",
    "LU", "ND", "PD", "PM", "PR", "PT", "PU", "RA", "SM", "TB", "TL", "TU",
    "U1", "U3", "YB",
};

pub fn is_ion_element(element: &str) -> bool {
    ION_ELEMENTS.contains(element.trim())
}

pub fn is_removable_element(element: &str) -> bool {
    REMOVABLE_ELEMENTS.contains(element.trim())
}

pub fn is_water_residue(residue_name: &str) -> bool {
    residue_name.trim() == WATER_RESIDUE_NAME
}
