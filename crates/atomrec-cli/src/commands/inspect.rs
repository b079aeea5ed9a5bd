use super::load_records;
use crate::cli::InspectArgs;
use crate::error::Result;
use atomrec::core::io::ingest::IngestReport;
use atomrec::workflows::summary::{StructureSummary, summarize};

pub fn run(args: InspectArgs) -> Result<()> {
    let (records, report) = load_records(&args.input)?;
    let summary = summarize(&records);
    println!("{}", render(&args.input.display().to_string(), &summary, &report));
    Ok(())
}

fn render(name: &str, summary: &StructureSummary, report: &IngestReport) -> String {
    let centroid = summary.centroid.map_or_else(
        || "-".to_string(),
        |c| format!("({:.3}, {:.3}, {:.3})", c.x, c.y, c.z),
    );
    let chains = if summary.chains.is_empty() {
        "-".to_string()
    } else {
        summary
            .chains
            .iter()
            .map(|c| if c.is_empty() { "_" } else { c.as_str() })
            .collect::<Vec<_>>()
            .join(" ")
    };

    format!(
        "{name}\n\
         \x20 lines read        {}\n\
         \x20 skipped lines     {} (short: {}, other records: {}, malformed: {})\n\
         \x20 ATOM records      {}\n\
         \x20 HETATM records    {}\n\
         \x20 ions              {}\n\
         \x20 removable         {}\n\
         \x20 ions to rename    {}\n\
         \x20 chains            {}\n\
         \x20 centroid          {}",
        report.lines_read,
        report.skipped(),
        report.too_short,
        report.not_a_record,
        report.malformed,
        summary.atoms,
        summary.hetatms,
        summary.ions,
        summary.removable,
        summary.needs_rename,
        chains,
        centroid,
    )
}
