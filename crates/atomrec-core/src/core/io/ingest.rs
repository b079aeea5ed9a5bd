use crate::core::record::{Record, RecordError};
use tracing::{debug, trace};

/// Tally of a best-effort ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub lines_read: usize,
    pub records: usize,
    pub too_short: usize,    // Blank lines, END, TER and other short records
    pub not_a_record: usize, // Long enough, but not ATOM/HETATM (HEADER, REMARK, ...)
    pub malformed: usize,    // ATOM/HETATM lines with unparsable numeric fields
}

impl IngestReport {
    pub fn skipped(&self) -> usize {
        self.too_short + self.not_a_record + self.malformed
    }

    fn tally(&mut self, error: &RecordError) {
        match error {
            RecordError::RecordTooShort { .. } => self.too_short += 1,
            RecordError::InvalidRecordType { .. } => self.not_a_record += 1,
            _ => self.malformed += 1,
        }
    }
}

/// Parses every line and keeps the ones that are valid records, in input order.
///
/// Lines that fail any parse check are discarded without error; this is how the
/// header, footer and blank lines of a structure file are filtered out.
pub fn ingest<I>(lines: I) -> Vec<Record>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ingest_with_report(lines).0
}

/// Same as [`ingest`], also reporting how many lines were skipped and why.
pub fn ingest_with_report<I>(lines: I) -> (Vec<Record>, IngestReport)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut records = Vec::new();
    let mut report = IngestReport::default();

    for (index, line) in lines.into_iter().enumerate() {
        report.lines_read += 1;
        match Record::parse(line.as_ref()) {
            Ok(record) => records.push(record),
            Err(e) => {
                trace!(line = index + 1, reason = %e, "Skipping non-record line");
                report.tally(&e);
            }
        }
    }
    report.records = records.len();

    debug!(
        lines_read = report.lines_read,
        records = report.records,
        skipped = report.skipped(),
        "Ingested coordinate records"
    );
    (records, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::test_lines::*;

    const HEADER: &str =
        "HEADER    OXIDOREDUCTASE                          01-JAN-00   1ABC              ";
    const BROKEN_ATOM: &str =
        "ATOM      9  CB  MET A   1      xx.xxx  16.717  24.392  1.00 28.12           C";

    #[test]
    fn ingest_keeps_only_records_in_input_order() {
        let lines = [HEADER, MET_N, "", WATER, "TER", MET_CA, BROKEN_ATOM, "END"];
        let records = ingest(lines);
        let serials: Vec<u32> = records.iter().map(Record::serial).collect();
        assert_eq!(serials, vec![1, 1002, 2]);
    }

    #[test]
    fn ingest_returns_n_minus_m_records() {
        let lines = vec![
            MET_N.to_string(),
            HEADER.to_string(),
            SODIUM.to_string(),
            BROKEN_ATOM.to_string(),
            GOLD.to_string(),
        ];
        let records = ingest(&lines);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].raw_line(), MET_N);
        assert_eq!(records[1].raw_line(), SODIUM);
        assert_eq!(records[2].raw_line(), GOLD);
    }

    #[test]
    fn ingest_does_not_deduplicate() {
        let records = ingest([MET_N, MET_N, MET_N]);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.serial() == 1));
    }

    #[test]
    fn ingest_of_empty_input_is_empty() {
        let records = ingest(Vec::<String>::new());
        assert!(records.is_empty());
    }

    #[test]
    fn ingest_can_run_on_independent_chunks_in_parallel() {
        let lines: Vec<&str> = [MET_N, HEADER, SODIUM, WATER, BROKEN_ATOM, GOLD]
            .into_iter()
            .cycle()
            .take(600)
            .collect();

        let parallel: Vec<Record> = std::thread::scope(|scope| {
            let handles: Vec<_> = lines
                .chunks(100)
                .map(|chunk| scope.spawn(move || ingest(chunk)))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(parallel.len(), 400);
        assert_eq!(parallel, ingest(&lines));
    }

    #[test]
    fn ingest_with_report_counts_each_skip_reason() {
        let lines = [HEADER, MET_N, "", "END", BROKEN_ATOM, HEME_IRON];
        let (records, report) = ingest_with_report(lines);
        assert_eq!(records.len(), 2);
        assert_eq!(
            report,
            IngestReport {
                lines_read: 6,
                records: 2,
                too_short: 2,
                not_a_record: 1,
                malformed: 1,
            }
        );
        assert_eq!(report.skipped(), 4);
    }
}
