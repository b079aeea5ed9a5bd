use super::load_non_empty_records;
use crate::cli::ExtractArgs;
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use crate::io;
use atomrec::workflows::extract::extract_fragments;
use tracing::{info, warn};

pub fn run(args: ExtractArgs) -> Result<()> {
    let include_ions = PartialConfig::load(args.config.as_deref())?.merge_extract_args(&args)?;

    let records = load_non_empty_records(&args.input)?;
    let fragments = extract_fragments(&records, include_ions);
    if fragments.is_empty() {
        warn!("No cofactor residues found in {:?}.", &args.input);
        println!("No cofactor residues to extract.");
        return Ok(());
    }

    std::fs::create_dir_all(&args.output_dir).map_err(|e| {
        CliError::Other(anyhow::anyhow!(
            "Failed to create output directory {}: {}",
            args.output_dir.display(),
            e
        ))
    })?;
    for fragment in &fragments {
        let path = args.output_dir.join(&fragment.file_name);
        info!(
            "Writing {} record(s) to {:?}",
            fragment.records.len(),
            &path
        );
        io::write_records_to_path(&path, &fragment.records)?;
    }

    println!(
        "Extracted {} fragment(s) to: {}",
        fragments.len(),
        args.output_dir.display()
    );
    Ok(())
}
