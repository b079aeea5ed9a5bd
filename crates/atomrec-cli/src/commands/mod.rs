pub mod clean;
pub mod extract;
pub mod inspect;

use crate::error::{CliError, Result};
use crate::io;
use atomrec::core::io::ingest::{IngestReport, ingest_with_report};
use atomrec::core::record::Record;
use std::path::Path;
use tracing::info;

/// Reads `path` and keeps its coordinate records.
fn load_records(path: &Path) -> Result<(Vec<Record>, IngestReport)> {
    info!("Loading input structure from {:?}", path);
    let lines = io::read_lines_from_path(path)?;
    let (records, report) = ingest_with_report(&lines);
    info!(
        "Read {} line(s): {} record(s), {} skipped.",
        report.lines_read,
        report.records,
        report.skipped()
    );
    Ok((records, report))
}

/// Like [`load_records`], but an input without any record is an error.
fn load_non_empty_records(path: &Path) -> Result<Vec<Record>> {
    let (records, _) = load_records(path)?;
    if records.is_empty() {
        return Err(CliError::NoRecords {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}
