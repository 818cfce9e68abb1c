//! Config operation - layering defaults, config file and flags.

use std::path::Path;

use crudgen_core::{ConfigResult, DEFAULT_CONFIG_FILE, RunConfig, RunConfigFile};

/// Resolve the run configuration.
///
/// An explicit `config` path must exist. Without one, `./crudgen.toml` is
/// used when present. Options set in `overrides` win over the file.
pub fn load_config(config: Option<&Path>, overrides: RunConfigFile) -> ConfigResult<RunConfig> {
    load_with_default(config, Path::new(DEFAULT_CONFIG_FILE), overrides)
}

fn load_with_default(
    config: Option<&Path>,
    default: &Path,
    overrides: RunConfigFile,
) -> ConfigResult<RunConfig> {
    let file = match config {
        Some(path) => RunConfigFile::open(path)?,
        None if default.is_file() => RunConfigFile::open(default)?,
        None => RunConfigFile::default(),
    };
    tracing::debug!(?file, ?overrides, "layering configuration");

    file.merge(overrides).resolve()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crudgen_core::{ConfigError, DEFAULT_OUTPUT_ROOT};
    use tempfile::TempDir;

    use super::*;

    fn with_input(input: &str) -> RunConfigFile {
        RunConfigFile {
            input_path: Some(PathBuf::from(input)),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_without_config_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("crudgen.toml");

        let config = load_with_default(None, &missing, with_input("Product.cs")).unwrap();

        assert_eq!(config.input_path, PathBuf::from("Product.cs"));
        assert_eq!(config.output_root, PathBuf::from(DEFAULT_OUTPUT_ROOT));
        assert_eq!(config.extension, "cs");
    }

    #[test]
    fn test_flags_win_over_default_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("crudgen.toml");
        std::fs::write(
            &file,
            "input_path = \"Models/Order.cs\"\noutput_root = \"out\"\n\n[namespaces]\napi = \"Shop.Api\"\n",
        )
        .unwrap();

        let config = load_with_default(None, &file, with_input("Product.cs")).unwrap();

        assert_eq!(config.input_path, PathBuf::from("Product.cs"));
        assert_eq!(config.output_root, temp.path().join("out"));
        assert_eq!(config.namespaces.api, "Shop.Api");
        assert_eq!(config.namespaces.core, "Sabiuz.Core");
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("other.toml");

        let err = load_with_default(Some(&missing), &missing, RunConfigFile::default())
            .unwrap_err();

        assert!(matches!(*err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_input_is_required() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("crudgen.toml");

        let err = load_with_default(None, &missing, RunConfigFile::default()).unwrap_err();

        assert!(matches!(*err, ConfigError::MissingInput));
    }
}
