use crate::cli::{CleanArgs, ExtractArgs};
use crate::error::{CliError, Result};
use atomrec::workflows::clean::CleanConfig;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialCleanConfig {
    remove_removable: Option<bool>,
    remove_cofactors: Option<bool>,
    remove_ions: Option<bool>,
    normalize_ion_names: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialExtractConfig {
    include_ions: Option<bool>,
}

/// The configuration file, every key optional.
///
/// ```toml
/// [clean]
/// remove-removable = true
/// remove-cofactors = false
/// remove-ions = false
/// normalize-ion-names = true
///
/// [extract]
/// include-ions = false
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    clean: Option<PartialCleanConfig>,
    extract: Option<PartialExtractConfig>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads `path` when given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the cleanup settings. Precedence, highest first: command-line flags,
    /// `--set` overrides, the configuration file, built-in defaults.
    pub fn merge_clean_args(mut self, args: &CleanArgs) -> Result<CleanConfig> {
        self.apply_set_values(&args.set_values)?;
        let file = self.clean.unwrap_or_default();
        let defaults = CleanConfig::default();

        Ok(CleanConfig {
            remove_removable: if args.keep_removable {
                false
            } else {
                file.remove_removable.unwrap_or(defaults.remove_removable)
            },
            remove_cofactors: args.remove_cofactors
                || file.remove_cofactors.unwrap_or(defaults.remove_cofactors),
            remove_ions: args.remove_ions || file.remove_ions.unwrap_or(defaults.remove_ions),
            normalize_ion_names: if args.no_normalize_ion_names {
                false
            } else {
                file.normalize_ion_names
                    .unwrap_or(defaults.normalize_ion_names)
            },
        })
    }

    /// Resolves whether free ions are extracted as fragments.
    pub fn merge_extract_args(mut self, args: &ExtractArgs) -> Result<bool> {
        self.apply_set_values(&args.set_values)?;
        let file = self.extract.unwrap_or_default();
        Ok(args.include_ions || file.include_ions.unwrap_or(false))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;
            let value: bool = value_str.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "Invalid boolean value for {}: {}",
                    key, value_str
                ))
            })?;

            let clean = PartialCleanConfig::default;
            match key.trim() {
                "clean.remove-removable" => {
                    self.clean.get_or_insert_with(clean).remove_removable = Some(value)
                }
                "clean.remove-cofactors" => {
                    self.clean.get_or_insert_with(clean).remove_cofactors = Some(value)
                }
                "clean.remove-ions" => self.clean.get_or_insert_with(clean).remove_ions = Some(value),
                "clean.normalize-ion-names" => {
                    self.clean.get_or_insert_with(clean).normalize_ion_names = Some(value)
                }
                "extract.include-ions" => {
                    self.extract
                        .get_or_insert_with(Default::default)
                        .include_ions = Some(value)
                }
                other => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        other
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn clean_args(extra: impl FnOnce(&mut CleanArgs)) -> CleanArgs {
        let mut args = CleanArgs {
            input: PathBuf::from("in.pdb"),
            output: PathBuf::from("out.pdb"),
            config: None,
            keep_removable: false,
            remove_cofactors: false,
            remove_ions: false,
            no_normalize_ion_names: false,
            set_values: Vec::new(),
        };
        extra(&mut args);
        args
    }

    fn extract_args(include_ions: bool, set_values: Vec<String>) -> ExtractArgs {
        ExtractArgs {
            input: PathBuf::from("in.pdb"),
            output_dir: PathBuf::from("fragments"),
            config: None,
            include_ions,
            set_values,
        }
    }

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_configuration_yields_library_defaults() {
        let config = PartialConfig::default()
            .merge_clean_args(&clean_args(|_| {}))
            .unwrap();
        assert_eq!(config, CleanConfig::default());
    }

    #[test]
    fn configuration_file_values_are_applied() {
        let file = write_config(
            "[clean]\nremove-removable = false\nremove-ions = true\n\n[extract]\ninclude-ions = true\n",
        );
        let partial = PartialConfig::from_file(file.path()).unwrap();

        let config = partial.clone().merge_clean_args(&clean_args(|_| {})).unwrap();
        assert!(!config.remove_removable);
        assert!(config.remove_ions);
        assert!(!config.remove_cofactors);
        assert!(config.normalize_ion_names);

        assert!(partial.merge_extract_args(&extract_args(false, vec![])).unwrap());
    }

    #[test]
    fn command_line_flags_override_configuration_file() {
        let file = write_config("[clean]\nremove-removable = true\nnormalize-ion-names = true\n");
        let partial = PartialConfig::load(Some(file.path())).unwrap();
        let config = partial
            .merge_clean_args(&clean_args(|a| {
                a.keep_removable = true;
                a.no_normalize_ion_names = true;
                a.remove_cofactors = true;
            }))
            .unwrap();
        assert!(!config.remove_removable);
        assert!(!config.normalize_ion_names);
        assert!(config.remove_cofactors);
    }

    #[test]
    fn set_values_override_configuration_file() {
        let file = write_config("[clean]\nremove-ions = true\n");
        let partial = PartialConfig::from_file(file.path()).unwrap();
        let config = partial
            .merge_clean_args(&clean_args(|a| {
                a.set_values = vec![
                    "clean.remove-ions=false".into(),
                    "clean.remove-cofactors = true".into(),
                ];
            }))
            .unwrap();
        assert!(!config.remove_ions);
        assert!(config.remove_cofactors);

        let include = PartialConfig::default()
            .merge_extract_args(&extract_args(false, vec!["extract.include-ions=true".into()]))
            .unwrap();
        assert!(include);
    }

    #[test]
    fn unknown_keys_in_file_are_rejected() {
        let file = write_config("[clean]\nremove-everything = true\n");
        let result = PartialConfig::from_file(file.path());
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["clean.remove-ions", "clean.remove-ions=maybe", "clean.colour=true"] {
            let result = PartialConfig::default()
                .merge_clean_args(&clean_args(|a| a.set_values = vec![bad.into()]));
            assert!(matches!(result, Err(CliError::Config(_))), "{bad} was accepted");
        }
    }

    #[test]
    fn missing_configuration_file_is_an_io_error() {
        let result = PartialConfig::load(Some(Path::new("/nonexistent/atomrec.toml")));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
