use crate::core::record::Record;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// The records of one heteroatom residue, with the file name it is written to.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub file_name: String,
    pub records: Vec<Record>,
}

type ResidueKey = (String, String, u32, String);

fn residue_key(record: &Record) -> ResidueKey {
    (
        record.chain_id().to_string(),
        record.residue_name().to_string(),
        record.residue_seq(),
        record.insertion_code().to_string(),
    )
}

/// Groups cofactor residues into fragments, in first-seen order.
///
/// Water and contaminants are never extracted. Free ions, whose residue label is
/// their own element symbol, are extracted only when `include_ions` is set; a metal
/// bound inside another residue (the iron of a heme) always stays with it.
/// A residue is identified by chain, name, sequence number and insertion code.
/// When two residues share a file name (same name and number on different chains,
/// or different insertion codes), later ones are prefixed with their chain id, if
/// any, and, if that still collides, suffixed with their insertion code.
#[instrument(skip_all, name = "extract_workflow")]
pub fn extract_fragments(records: &[Record], include_ions: bool) -> Vec<Fragment> {
    let mut fragments: Vec<Fragment> = Vec::new();
    let mut index_by_residue: HashMap<ResidueKey, usize> = HashMap::new();
    let mut used_file_names: HashSet<String> = HashSet::new();

    for record in records {
        if !record.is_cofactor() || record.is_removable() {
            continue;
        }
        if is_free_ion(record) && !include_ions {
            continue;
        }

        let key = residue_key(record);
        if let Some(&index) = index_by_residue.get(&key) {
            fragments[index].records.push(record.clone());
            continue;
        }

        let file_name = unique_file_name(record, &used_file_names);
        used_file_names.insert(file_name.clone());
        index_by_residue.insert(key, fragments.len());
        fragments.push(Fragment {
            file_name,
            records: vec![record.clone()],
        });
    }

    debug!(fragments = fragments.len(), "Extracted cofactor fragments");
    fragments
}

fn is_free_ion(record: &Record) -> bool {
    record.is_ion() && !record.needs_residue_rename()
}

fn unique_file_name(record: &Record, used: &HashSet<String>) -> String {
    let base = record.fragment_file_name();
    if !used.contains(&base) {
        return base;
    }
    let with_chain = match record.chain_id() {
        "" => base,
        chain => format!("{}-{}", chain, base),
    };
    if !used.contains(&with_chain) {
        return with_chain;
    }
    let stem = with_chain.trim_end_matches(".pdb");
    let mut candidate = format!("{}{}.pdb", stem, record.insertion_code());
    let mut copy = 1;
    while used.contains(&candidate) {
        copy += 1;
        candidate = format!("{}{}_{}.pdb", stem, record.insertion_code(), copy);
    }
    candidate
}
