//! Run configuration.
//!
//! A run is described by a [`RunConfig`]. It is assembled from built-in
//! defaults, an optional `crudgen.toml`, and command line overrides, in that
//! order of precedence (later wins).

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "crudgen.toml";

/// Output root used when neither the config file nor the CLI sets one.
pub const DEFAULT_OUTPUT_ROOT: &str = "GeneratedOutput";

/// Extension given to every generated artifact.
pub const DEFAULT_EXTENSION: &str = "cs";

/// Result type for configuration loading (boxed to reduce size on stack)
pub type ConfigResult<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(crudgen::config::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("no input file given")]
    #[diagnostic(
        code(crudgen::config::missing_input),
        help("pass the model file as INPUT or set `input_path` in crudgen.toml")
    )]
    MissingInput,

    #[error("invalid {field} '{value}'")]
    #[diagnostic(code(crudgen::config::invalid), help("{reason}"))]
    Invalid {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Root namespaces the generated artifacts live in and import from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    /// Namespace of the web API project (`<api>.Application`, `<api>.Controllers`).
    pub api: String,
    /// Namespace of the shared core project (`<core>.Data`, `<core>.Models`, `<core>.Web`).
    pub core: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            api: "Sabiuz.Api".to_string(),
            core: "Sabiuz.Core".to_string(),
        }
    }
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Type definition to read.
    pub input_path: PathBuf,
    /// Directory the `Application/` and `Controllers/` trees are written under.
    pub output_root: PathBuf,
    /// Extension of generated files, without the leading dot.
    pub extension: String,
    pub namespaces: Namespaces,
}

impl RunConfig {
    /// Configuration with defaults for everything except the input.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            namespaces: Namespaces::default(),
        }
    }

    /// Set the output root.
    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }
}

/// Namespace overrides as written in a config file or on the command line.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceOverrides {
    pub api: Option<String>,
    pub core: Option<String>,
}

/// Partial configuration: every option is optional.
///
/// Both a `crudgen.toml` and the command line produce one of these; they
/// are layered with [`RunConfigFile::merge`] and turned into a [`RunConfig`]
/// with [`RunConfigFile::resolve`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfigFile {
    #[serde(default, alias = "inputPath")]
    pub input_path: Option<PathBuf>,
    #[serde(default, alias = "outputRoot")]
    pub output_root: Option<PathBuf>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub namespaces: NamespaceOverrides,
}

impl RunConfigFile {
    /// Open and parse a config file.
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    pub fn open(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let mut file = Self::from_str_with_filename(&content, &path.display().to_string())?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            file.input_path = file.input_path.map(|p| base.join(p));
            file.output_root = file.output_root.map(|p| base.join(p));
        }

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(file)
    }

    /// Parse config file content, using `filename` in diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|source| {
            let span = source.span().map(SourceSpan::from);
            Box::new(ConfigError::Parse {
                filename: filename.to_string(),
                src: NamedSource::new(filename, content.to_string()),
                span,
                source,
            })
        })
    }

    /// Layer `other` on top of `self`; options set in `other` win.
    pub fn merge(self, other: RunConfigFile) -> Self {
        Self {
            input_path: other.input_path.or(self.input_path),
            output_root: other.output_root.or(self.output_root),
            extension: other.extension.or(self.extension),
            namespaces: NamespaceOverrides {
                api: other.namespaces.api.or(self.namespaces.api),
                core: other.namespaces.core.or(self.namespaces.core),
            },
        }
    }

    /// Fill unset options with defaults and validate the result.
    pub fn resolve(self) -> ConfigResult<RunConfig> {
        let input_path = self.input_path.ok_or(Box::new(ConfigError::MissingInput))?;
        let defaults = Namespaces::default();

        let extension = self
            .extension
            .map(|ext| ext.trim_start_matches('.').to_string())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Box::new(ConfigError::Invalid {
                field: "extension",
                value: extension,
                reason: "use a plain file extension such as `cs`",
            }));
        }

        let namespaces = Namespaces {
            api: self.namespaces.api.unwrap_or(defaults.api),
            core: self.namespaces.core.unwrap_or(defaults.core),
        };
        for (field, value) in [
            ("api namespace", &namespaces.api),
            ("core namespace", &namespaces.core),
        ] {
            if !is_namespace(value) {
                return Err(Box::new(ConfigError::Invalid {
                    field,
                    value: value.clone(),
                    reason: "namespaces are dot-separated identifiers, e.g. `Acme.Api`",
                }));
            }
        }

        Ok(RunConfig {
            input_path,
            output_root: self
                .output_root
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT)),
            extension,
            namespaces,
        })
    }
}

fn is_namespace(value: &str) -> bool {
    !value.is_empty()
        && value.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfigFile {
            input_path: Some("Product.cs".into()),
            ..Default::default()
        }
        .resolve()
        .unwrap();

        assert_eq!(config, RunConfig::new("Product.cs"));
        assert_eq!(config.output_root, PathBuf::from("GeneratedOutput"));
        assert_eq!(config.extension, "cs");
        assert_eq!(config.namespaces.api, "Sabiuz.Api");
    }

    #[test]
    fn test_missing_input() {
        let err = RunConfigFile::default().resolve().unwrap_err();
        assert!(matches!(*err, ConfigError::MissingInput));
    }

    #[test]
    fn test_parse_snake_and_camel_keys() {
        let snake = RunConfigFile::from_str_with_filename(
            r#"
            input_path = "Models/Product.cs"
            output_root = "out"
            "#,
            "crudgen.toml",
        )
        .unwrap();
        let camel = RunConfigFile::from_str_with_filename(
            r#"
            inputPath = "Models/Product.cs"
            outputRoot = "out"
            "#,
            "crudgen.toml",
        )
        .unwrap();

        assert_eq!(snake.input_path, camel.input_path);
        assert_eq!(snake.output_root, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = RunConfigFile::from_str_with_filename("output = \"x\"", "crudgen.toml")
            .unwrap_err();
        assert!(matches!(*err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = RunConfigFile::from_str_with_filename(
            r#"
            input_path = "Product.cs"
            output_root = "from-file"

            [namespaces]
            api = "Acme.Api"
            core = "Acme.Core"
            "#,
            "crudgen.toml",
        )
        .unwrap();
        let cli = RunConfigFile {
            output_root: Some("from-cli".into()),
            namespaces: NamespaceOverrides {
                api: Some("Shop.Api".to_string()),
                core: None,
            },
            ..Default::default()
        };

        let config = file.merge(cli).resolve().unwrap();

        assert_eq!(config.input_path, PathBuf::from("Product.cs"));
        assert_eq!(config.output_root, PathBuf::from("from-cli"));
        assert_eq!(config.namespaces.api, "Shop.Api");
        assert_eq!(config.namespaces.core, "Acme.Core");
    }

    #[test]
    fn test_extension_leading_dot_is_stripped() {
        let config = RunConfigFile {
            input_path: Some("Product.cs".into()),
            extension: Some(".cs".to_string()),
            ..Default::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(config.extension, "cs");
    }

    #[test]
    fn test_invalid_namespace() {
        let err = RunConfigFile {
            input_path: Some("Product.cs".into()),
            namespaces: NamespaceOverrides {
                api: Some("Acme..Api".to_string()),
                core: None,
            },
            ..Default::default()
        }
        .resolve()
        .unwrap_err();
        assert!(matches!(*err, ConfigError::Invalid { field: "api namespace", .. }));
    }

    #[test]
    fn test_open_resolves_relative_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crudgen.toml");
        std::fs::write(&path, "input_path = \"Product.cs\"\n").unwrap();

        let file = RunConfigFile::open(&path).unwrap();

        assert_eq!(file.input_path, Some(temp.path().join("Product.cs")));
    }

    #[test]
    fn test_open_missing_file() {
        let err = RunConfigFile::open("does/not/exist.toml").unwrap_err();
        assert!(matches!(*err, ConfigError::Io { .. }));
    }
}
