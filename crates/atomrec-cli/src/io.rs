use crate::error::Result;
use atomrec::core::record::Record;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Reads every line from `reader` with its line terminator and any trailing `\r` removed.
pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
        .collect()
}

pub fn read_lines_from_path(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    Ok(read_lines(BufReader::new(file))?)
}

/// Writes one serialized record per line, followed by an `END` line.
pub fn write_records(writer: &mut impl Write, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", record)?;
    }
    writeln!(writer, "END")?;
    writer.flush()
}

pub fn write_records_to_path(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records)?;
    Ok(())
}
