//! Configuration for a detection run

use std::path::PathBuf;

use super::file::FileConfig;
use crate::analyzer::{AlwaysDirtyGate, DirtyPattern};
use crate::cli::{Cli, DependencySource, OutputFormat};
use crate::constants::detect::{
    DEFAULT_ALWAYS_DIRTY_PATTERN, DEFAULT_BASE_REF, DEFAULT_PARALLELISM,
};
use crate::error::RipplesError;
use crate::providers::ChangeSource;

#[derive(Debug, Clone)]
pub struct DetectConfig {
    /// Workspace root; the git repository root when not set
    pub root: Option<PathBuf>,

    /// Where changed files come from
    pub change_source: ChangeSource,

    /// Compiled always-dirty patterns
    pub gate: AlwaysDirtyGate,

    /// Follow reverse dependencies past the directly dirty projects
    pub transitive: bool,

    /// Maximum number of dependency lookups in flight
    pub parallelism: usize,

    /// Where project dependencies are read from
    pub dependency_source: DependencySource,

    /// Output format
    pub format: OutputFormat,

    /// Include per-file detail in the human report
    pub verbose: bool,
}

impl DetectConfig {
    pub fn builder() -> DetectConfigBuilder {
        DetectConfigBuilder::default()
    }

    /// Merge command-line flags over the configuration file
    ///
    /// A flag given on the command line wins over the file, which wins over
    /// the built-in default.
    pub fn from_cli(cli: &Cli, file: FileConfig) -> Result<Self, RipplesError> {
        let change_source = if cli.staged {
            ChangeSource::Staged
        } else if cli.current_commit {
            ChangeSource::CurrentCommit
        } else if let Some(command) = &cli.list_command {
            ChangeSource::Command(command.clone())
        } else {
            ChangeSource::Diff {
                base: cli.tag.clone(),
            }
        };

        let mut builder = Self::builder()
            .with_root(cli.root.clone().or(file.root))
            .with_change_source(change_source)
            .with_transitive(!cli.no_transitive && file.transitive.unwrap_or(true))
            .with_format(cli.format)
            .with_verbose(cli.verbose);

        if let Some(parallelism) = cli.parallelism.map(usize::from).or(file.parallelism) {
            builder = builder.with_parallelism(parallelism);
        }
        if let Some(source) = cli.dependency_source.or(file.dependency_source) {
            builder = builder.with_dependency_source(source);
        }
        if let Some(patterns) = file.always_dirty {
            builder = builder.with_always_dirty_patterns(patterns);
        }
        if let Some(globs) = file.always_dirty_globs {
            builder = builder.with_always_dirty_globs(globs);
        }

        builder.build()
    }
}

pub struct DetectConfigBuilder {
    root: Option<PathBuf>,
    change_source: ChangeSource,
    always_dirty_patterns: Vec<String>,
    always_dirty_globs: Vec<String>,
    transitive: bool,
    parallelism: usize,
    dependency_source: DependencySource,
    format: OutputFormat,
    verbose: bool,
}

impl Default for DetectConfigBuilder {
    fn default() -> Self {
        Self {
            root: None,
            change_source: ChangeSource::Diff {
                base: DEFAULT_BASE_REF.to_string(),
            },
            always_dirty_patterns: vec![DEFAULT_ALWAYS_DIRTY_PATTERN.to_string()],
            always_dirty_globs: Vec::new(),
            transitive: true,
            parallelism: DEFAULT_PARALLELISM,
            dependency_source: DependencySource::default(),
            format: OutputFormat::Json,
            verbose: false,
        }
    }
}

impl DetectConfigBuilder {
    pub fn with_root(mut self, root: Option<PathBuf>) -> Self {
        self.root = root;
        self
    }

    pub fn with_change_source(mut self, source: ChangeSource) -> Self {
        self.change_source = source;
        self
    }

    pub fn with_always_dirty_patterns(mut self, patterns: Vec<String>) -> Self {
        self.always_dirty_patterns = patterns;
        self
    }

    pub fn with_always_dirty_globs(mut self, globs: Vec<String>) -> Self {
        self.always_dirty_globs = globs;
        self
    }

    pub fn with_transitive(mut self, transitive: bool) -> Self {
        self.transitive = transitive;
        self
    }

    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism;
        self
    }

    pub fn with_dependency_source(mut self, source: DependencySource) -> Self {
        self.dependency_source = source;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Result<DetectConfig, RipplesError> {
        if self.parallelism == 0 {
            return Err(RipplesError::ConfigurationError {
                message: "parallelism must be at least 1".to_string(),
            });
        }

        let regexes = self
            .always_dirty_patterns
            .iter()
            .map(|pattern| DirtyPattern::regex(pattern));
        let globs = self
            .always_dirty_globs
            .iter()
            .map(|pattern| DirtyPattern::glob(pattern));
        let patterns = regexes.chain(globs).collect::<Result<Vec<_>, _>>()?;

        Ok(DetectConfig {
            root: self.root,
            change_source: self.change_source,
            gate: AlwaysDirtyGate::new(patterns),
            transitive: self.transitive,
            parallelism: self.parallelism,
            dependency_source: self.dependency_source,
            format: self.format,
            verbose: self.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ripples").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let config = DetectConfig::builder().build().unwrap();

        assert_eq!(config.parallelism, 5);
        assert!(config.transitive);
        assert_eq!(config.dependency_source, DependencySource::Npm);
        assert_eq!(
            config.change_source,
            ChangeSource::Diff {
                base: "master".to_string()
            }
        );
        assert!(config.gate.check(&["yarn.lock".to_string()]));
    }

    #[test]
    fn test_builder_validates_eagerly() {
        assert!(
            DetectConfig::builder()
                .with_parallelism(0)
                .build()
                .is_err()
        );
        assert!(
            DetectConfig::builder()
                .with_always_dirty_globs(vec!["[".to_string()])
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig {
            parallelism: Some(2),
            transitive: Some(true),
            dependency_source: Some(DependencySource::Declared),
            root: Some(PathBuf::from("/from/file")),
            ..FileConfig::default()
        };

        let config = DetectConfig::from_cli(
            &cli(&["-p", "9", "--no-transitive", "--root", "/from/cli"]),
            file,
        )
        .unwrap();

        assert_eq!(config.parallelism, 9);
        assert!(!config.transitive);
        assert_eq!(config.dependency_source, DependencySource::Declared);
        assert_eq!(config.root, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileConfig {
            always_dirty: Some(vec![r"^pnpm-lock\.yaml$".to_string()]),
            always_dirty_globs: Some(vec!["config/*.json".to_string()]),
            transitive: Some(false),
            ..FileConfig::default()
        };

        let config = DetectConfig::from_cli(&cli(&[]), file).unwrap();

        assert!(!config.transitive);
        assert_eq!(config.gate.patterns().len(), 2);
        assert!(config.gate.check(&["pnpm-lock.yaml".to_string()]));
        assert!(config.gate.check(&["config/base.json".to_string()]));
        assert!(!config.gate.check(&["yarn.lock".to_string()]));
    }

    #[test]
    fn test_change_source_selection() {
        let staged = DetectConfig::from_cli(&cli(&["--staged"]), FileConfig::default()).unwrap();
        assert_eq!(staged.change_source, ChangeSource::Staged);

        let commit =
            DetectConfig::from_cli(&cli(&["--current-commit"]), FileConfig::default()).unwrap();
        assert_eq!(commit.change_source, ChangeSource::CurrentCommit);

        let command = DetectConfig::from_cli(
            &cli(&["--list-command", "cat changed.txt"]),
            FileConfig::default(),
        )
        .unwrap();
        assert_eq!(
            command.change_source,
            ChangeSource::Command("cat changed.txt".to_string())
        );

        let diff = DetectConfig::from_cli(&cli(&["-t", "HEAD~1"]), FileConfig::default()).unwrap();
        assert_eq!(
            diff.change_source,
            ChangeSource::Diff {
                base: "HEAD~1".to_string()
            }
        );
    }
}
