use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgGroup, Parser};
use serde::Deserialize;

use crate::constants::detect::{DEFAULT_BASE_REF, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "ripples",
    about = "🌊 Find the projects in a monorepo that are dirty after a change",
    long_about = "ripples maps changed files to the workspace projects that own them, then \
                  follows reverse dependencies to find every project that has to be rebuilt \
                  or retested. Changes to lockfiles and root manifests mark the whole \
                  workspace dirty. The result is printed as a JSON object keyed by project \
                  name, ready to drive CI job selection.",
    version,
    group(
        ArgGroup::new("change_source")
            .args(["staged", "current_commit", "list_command"])
            .multiple(false)
    )
)]
pub struct Cli {
    /// Write diagnostic logs to stderr
    #[arg(short, long, env = "RIPPLES_VERBOSE", value_parser = BoolishValueParser::new())]
    pub verbose: bool,

    /// Ref to compare the working tree against (master, HEAD~1, a sha, ...)
    #[arg(
        short,
        long,
        value_name = "REF",
        default_value = DEFAULT_BASE_REF,
        env = "RIPPLES_TAG"
    )]
    pub tag: String,

    /// Only use currently staged files
    #[arg(long, env = "RIPPLES_STAGED", value_parser = BoolishValueParser::new())]
    pub staged: bool,

    /// Only use files touched by the current commit
    #[arg(long, env = "RIPPLES_CURRENT_COMMIT", value_parser = BoolishValueParser::new())]
    pub current_commit: bool,

    /// Command whose output lines are the changed files
    #[arg(long, value_name = "COMMAND", env = "RIPPLES_LIST_COMMAND")]
    pub list_command: Option<String>,

    /// Don't follow transitive dependencies
    #[arg(long, env = "RIPPLES_NO_TRANSITIVE", value_parser = BoolishValueParser::new())]
    pub no_transitive: bool,

    /// Path to the configuration file
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = DEFAULT_CONFIG_FILE,
        env = "RIPPLES_CONFIG"
    )]
    pub config: PathBuf,

    /// Number of dependency lookups to run at once
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..),
        env = "RIPPLES_PARALLELISM"
    )]
    pub parallelism: Option<u16>,

    /// Workspace root (defaults to the root of the git repository)
    #[arg(long, value_name = "PATH", env = "RIPPLES_ROOT")]
    pub root: Option<PathBuf>,

    /// Where project dependencies are read from
    #[arg(long, value_enum, env = "RIPPLES_DEPENDENCY_SOURCE")]
    pub dependency_source: Option<DependencySource>,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_FORMAT,
        env = "RIPPLES_FORMAT"
    )]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Human,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DependencySource {
    /// Installed dependency tree from `npm list`
    #[default]
    Npm,
    /// Workspace dependencies declared in the workspace manifest
    Declared,
}
