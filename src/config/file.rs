//! Optional TOML configuration file
//!
//! ```toml
//! always_dirty = ['(?i)^[a-z0-9]+\.(json|lock)$']
//! always_dirty_globs = ["tools/build/**"]
//! root = "/path/to/monorepo"
//! transitive = true
//! parallelism = 5
//! dependency_source = "npm"
//! ```

use std::path::{Path, PathBuf};

use console::style;
use miette::NamedSource;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::analyzer::DirtyPattern;
use crate::cli::DependencySource;
use crate::error::{ConfigParseError, RipplesError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Regular expressions replacing the built-in always-dirty pattern
    pub always_dirty: Option<Vec<String>>,
    /// Globs checked in addition to the regular expressions
    pub always_dirty_globs: Option<Vec<String>>,
    pub root: Option<PathBuf>,
    pub transitive: Option<bool>,
    pub parallelism: Option<usize>,
    pub dependency_source: Option<DependencySource>,
}

impl FileConfig {
    /// Parse and validate configuration text
    pub fn parse(file: &str, content: &str) -> Result<Self, RipplesError> {
        let config: Self = toml::from_str(content).map_err(|source| {
            RipplesError::ConfigParseError(Box::new(ConfigParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span: source.span().map(Into::into),
                source,
            }))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Read `path`, returning `None` when it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>, RipplesError> {
        if !path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(path).map_err(|source| RipplesError::FileReadError {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&path.display().to_string(), &content).map(Some)
    }

    /// Like [`FileConfig::load`], but a broken file only produces a warning
    /// and the built-in defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(config)) => {
                debug!("Found config path of {}", path.display());
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                warn!("ignoring configuration file {}: {err}", path.display());
                eprintln!(
                    "{} Ignoring configuration file, using defaults: {:?}",
                    style("⚠").yellow(),
                    miette::Report::new(err)
                );
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), RipplesError> {
        for pattern in self.always_dirty.iter().flatten() {
            DirtyPattern::regex(pattern)?;
        }

        for pattern in self.always_dirty_globs.iter().flatten() {
            DirtyPattern::glob(pattern)?;
        }

        if self.parallelism == Some(0) {
            return Err(RipplesError::ConfigurationError {
                message: "parallelism must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_full_file() {
        let config = FileConfig::parse(
            ".ripples.toml",
            r#"
always_dirty = ['^yarn\.lock$']
always_dirty_globs = ["tools/**"]
root = "/repo"
transitive = false
parallelism = 8
dependency_source = "declared"
"#,
        )
        .unwrap();

        assert_eq!(
            config,
            FileConfig {
                always_dirty: Some(vec![r"^yarn\.lock$".to_string()]),
                always_dirty_globs: Some(vec!["tools/**".to_string()]),
                root: Some(PathBuf::from("/repo")),
                transitive: Some(false),
                parallelism: Some(8),
                dependency_source: Some(DependencySource::Declared),
            }
        );
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        assert_eq!(
            FileConfig::parse(".ripples.toml", "").unwrap(),
            FileConfig::default()
        );
    }

    #[test]
    fn test_syntax_error_has_span() {
        let err = FileConfig::parse(".ripples.toml", "transitive = = true").unwrap_err();

        match err {
            RipplesError::ConfigParseError(parse) => {
                assert_eq!(parse.file, ".ripples.toml");
                assert!(parse.span.is_some());
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(FileConfig::parse(".ripples.toml", "required_files = []").is_err());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = FileConfig::parse(".ripples.toml", "always_dirty = ['(']").unwrap_err();
        assert!(matches!(err, RipplesError::InvalidPattern { .. }));
    }

    #[test]
    fn test_zero_parallelism_is_rejected() {
        let err = FileConfig::parse(".ripples.toml", "parallelism = 0").unwrap_err();
        assert!(matches!(err, RipplesError::ConfigurationError { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(
            FileConfig::load(&temp.path().join(".ripples.toml"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_load_or_default_falls_back_on_broken_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".ripples.toml");
        fs::write(&path, "parallelism = \"many\"").unwrap();

        assert!(FileConfig::load(&path).is_err());
        assert_eq!(FileConfig::load_or_default(&path), FileConfig::default());
    }

    #[test]
    fn test_load_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".ripples.toml");
        fs::write(&path, "transitive = false\n").unwrap();

        let config = FileConfig::load_or_default(&path);
        assert_eq!(config.transitive, Some(false));
    }
}
