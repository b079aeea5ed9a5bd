use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "atomrec - inspect, clean and split the ATOM/HETATM records of PDB coordinate files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a summary of the coordinate records of a structure file.
    Inspect(InspectArgs),
    /// Remove water, contaminants, ions or cofactors and normalize ion names.
    Clean(CleanArgs),
    /// Write every cofactor residue to its own file.
    Extract(ExtractArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the input structure file (e.g., 1abc.pdb).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Arguments for the `clean` subcommand.
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Path to the input structure file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the cleaned structure file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep water and heavy-ion contaminants.
    #[arg(long)]
    pub keep_removable: bool,

    /// Remove heteroatom residues that are not ions.
    #[arg(long)]
    pub remove_cofactors: bool,

    /// Remove ion records.
    #[arg(long)]
    pub remove_ions: bool,

    /// Leave ion atom names as they are.
    #[arg(long)]
    pub no_normalize_ion_names: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S clean.remove-ions=true
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to the input structure file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory that receives one file per cofactor residue.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also extract free ions as their own fragments.
    #[arg(long)]
    pub include_ions: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S extract.include-ions=true
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}
