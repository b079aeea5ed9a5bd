use crate::core::record::{Record, RecordError};
use tracing::{debug, info, instrument};

/// Which record categories a cleanup pass removes or rewrites.
///
/// Ions and cofactors are judged on `HETATM` records only: the ion table also
/// lists elements such as `S` and `P` that occur in standard residues, and those
/// `ATOM` records are never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanConfig {
    /// Drop water and heavy-ion contaminants.
    pub remove_removable: bool,
    /// Drop heteroatom records that are not ions.
    pub remove_cofactors: bool,
    /// Drop ion records.
    pub remove_ions: bool,
    /// Rename kept ions whose residue label differs from their element to the
    /// element symbol.
    pub normalize_ion_names: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            remove_removable: true,
            remove_cofactors: false,
            remove_ions: false,
            normalize_ion_names: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub kept: usize,
    pub removed_removable: usize,
    pub removed_cofactors: usize,
    pub removed_ions: usize,
    pub renamed_ions: usize,
}

impl CleanReport {
    pub fn removed(&self) -> usize {
        self.removed_removable + self.removed_cofactors + self.removed_ions
    }
}

fn is_ion_record(record: &Record) -> bool {
    record.is_hetatm() && record.is_ion()
}

/// Filters and normalizes `records` according to `config`, keeping input order.
///
/// A record is checked against the categories in a fixed order (removable, ion,
/// cofactor) and counted under the first one that removes it.
///
/// # Errors
///
/// Propagates a [`RecordError`] if an ion's element symbol cannot be used as an
/// atom name.
#[instrument(skip_all, name = "clean_workflow")]
pub fn clean(
    records: Vec<Record>,
    config: &CleanConfig,
) -> Result<(Vec<Record>, CleanReport), RecordError> {
    let mut report = CleanReport::default();
    let mut kept = Vec::with_capacity(records.len());

    for mut record in records {
        if config.remove_removable && record.is_removable() {
            report.removed_removable += 1;
            continue;
        }
        let is_ion = is_ion_record(&record);
        if is_ion && config.remove_ions {
            report.removed_ions += 1;
            continue;
        }
        if !is_ion && record.is_cofactor() && config.remove_cofactors {
            report.removed_cofactors += 1;
            continue;
        }

        if is_ion
            && config.normalize_ion_names
            && record.needs_residue_rename()
            && record.atom_name() != record.element()
        {
            let element = record.element().to_string();
            debug!(
                serial = record.serial(),
                from = %record.atom_name(),
                to = %element,
                "Normalizing ion atom name"
            );
            record.set_atom_name(&element)?;
            report.renamed_ions += 1;
        }
        kept.push(record);
    }
    report.kept = kept.len();

    info!(
        kept = report.kept,
        removed = report.removed(),
        renamed = report.renamed_ions,
        "Cleanup finished."
    );
    Ok((kept, report))
}
