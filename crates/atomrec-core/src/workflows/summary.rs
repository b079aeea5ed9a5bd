use crate::core::record::Record;
use nalgebra::{Point3, Vector3};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructureSummary {
    pub atoms: usize,
    pub hetatms: usize,
    pub ions: usize,
    pub removable: usize,
    pub needs_rename: usize,
    pub chains: Vec<String>,         // Distinct chain ids, in first-seen order
    pub centroid: Option<Point3<f64>>, // None for an empty record set
}

impl StructureSummary {
    pub fn total(&self) -> usize {
        self.atoms + self.hetatms
    }
}

#[instrument(skip_all, name = "summary_workflow")]
pub fn summarize(records: &[Record]) -> StructureSummary {
    let mut summary = StructureSummary::default();
    let mut coordinate_sum = Vector3::zeros();

    for record in records {
        if record.is_atom() {
            summary.atoms += 1;
        } else {
            summary.hetatms += 1;
        }
        if record.is_ion() {
            summary.ions += 1;
        }
        if record.is_removable() {
            summary.removable += 1;
        }
        if record.needs_residue_rename() {
            summary.needs_rename += 1;
        }
        if !summary.chains.iter().any(|c| c == record.chain_id()) {
            summary.chains.push(record.chain_id().to_string());
        }
        coordinate_sum += record.position().coords;
    }

    if !records.is_empty() {
        summary.centroid = Some(Point3::from(coordinate_sum / records.len() as f64));
    }

    debug!(
        total = summary.total(),
        chains = summary.chains.len(),
        "Summarized structure"
    );
    summary
}
