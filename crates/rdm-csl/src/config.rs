//! Projector configuration
//!
//! Loaded from TOML; every key is optional:
//!
//! ```toml
//! default_resource_type = "publication-article"
//! default_csl_type = "article"
//! funder_scheme_priority = ["ror", "grid", "doi", "isni", "gnd"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Settings for CSL projection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CslConfig {
    /// Resource type assumed for records that carry none
    pub default_resource_type: String,
    /// CSL type used when the resource type has no `csl` prop ("article" is CSL's catch-all)
    pub default_csl_type: String,
    /// Funder identifier schemes to cite, most preferred first
    pub funder_scheme_priority: Vec<String>,
}

impl Default for CslConfig {
    fn default() -> Self {
        Self {
            default_resource_type: "publication-article".to_string(),
            default_csl_type: "article".to_string(),
            funder_scheme_priority: ["ror", "grid", "doi", "isni", "gnd"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CslConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CslConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Default location: `<config dir>/rdm-csl/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rdm-csl").join("config.toml"))
    }

    /// Load from `path` if given, else from the default location if that
    /// file exists, else fall back to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {:?}", path);
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_resource_type.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "default_resource_type",
                message: "must not be empty".to_string(),
            });
        }
        if self.default_csl_type.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "default_csl_type",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CslConfig::default();
        assert_eq!(config.default_resource_type, "publication-article");
        assert_eq!(config.default_csl_type, "article");
        assert_eq!(
            config.funder_scheme_priority,
            vec!["ror", "grid", "doi", "isni", "gnd"]
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CslConfig::from_toml_str(r#"funder_scheme_priority = ["doi", "ror"]"#).unwrap();
        assert_eq!(config.funder_scheme_priority, vec!["doi", "ror"]);
        assert_eq!(config.default_csl_type, "article");

        assert_eq!(CslConfig::from_toml_str("").unwrap(), CslConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            CslConfig::from_toml_str("default_csl_type = 42"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CslConfig::from_toml_str(r#"default_csl_type = """#),
            Err(ConfigError::Invalid { field: "default_csl_type", .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"default_resource_type = "dataset""#).unwrap();

        let config = CslConfig::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.default_resource_type, "dataset");
    }

    #[test]
    fn test_load_missing_file() {
        let err = CslConfig::load(Path::new("/nonexistent/rdm-csl.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
