use super::load_non_empty_records;
use crate::cli::CleanArgs;
use crate::config::PartialConfig;
use crate::error::Result;
use crate::io;
use atomrec::workflows::clean::clean;
use tracing::{info, warn};

pub fn run(args: CleanArgs) -> Result<()> {
    let partial_config = PartialConfig::load(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_clean_args(&args)?;

    let records = load_non_empty_records(&args.input)?;
    let (kept, report) = clean(records, &config)?;

    if kept.is_empty() {
        warn!("Cleanup removed every record; the output will only contain END.");
    }
    io::write_records_to_path(&args.output, &kept)?;

    println!(
        "Kept {} record(s), removed {} (water/contaminants: {}, ions: {}, cofactors: {}), renamed {} ion(s).",
        report.kept,
        report.removed(),
        report.removed_removable,
        report.removed_ions,
        report.removed_cofactors,
        report.renamed_ions
    );
    println!("Cleaned structure written to: {}", args.output.display());
    Ok(())
}
