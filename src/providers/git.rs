use std::fmt;
use std::path::{Path, PathBuf};

use super::process::{CommandLine, run_checked};
use super::{ChangedFilesProvider, parse_path_list};
use crate::error::RipplesError;

/// Where the list of changed files comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSource {
    /// Files that differ between the working tree and a ref
    Diff { base: String },
    /// Files added to the index
    Staged,
    /// Files touched by the `HEAD` commit
    CurrentCommit,
    /// Output lines of an arbitrary command
    Command(String),
}

impl ChangeSource {
    fn command_line(&self) -> Result<CommandLine, RipplesError> {
        Ok(match self {
            Self::Diff { base } => CommandLine::new("git", ["diff", "--name-only", base.as_str()]),
            Self::Staged => CommandLine::new("git", ["diff", "--name-only", "--cached"]),
            Self::CurrentCommit => CommandLine::new(
                "git",
                ["diff-tree", "--no-commit-id", "--name-only", "-r", "HEAD"],
            ),
            Self::Command(command) => CommandLine::parse(command)?,
        })
    }
}

impl fmt::Display for ChangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diff { base } => write!(f, "diff against {base}"),
            Self::Staged => write!(f, "staged files"),
            Self::CurrentCommit => write!(f, "current commit"),
            Self::Command(command) => write!(f, "`{command}`"),
        }
    }
}

/// Changed files obtained by running git (or a custom command) in the root
pub struct GitChanges {
    root: PathBuf,
    source: ChangeSource,
}

impl GitChanges {
    pub fn new(root: impl Into<PathBuf>, source: ChangeSource) -> Self {
        Self {
            root: root.into(),
            source,
        }
    }

    pub fn source(&self) -> &ChangeSource {
        &self.source
    }
}

impl ChangedFilesProvider for GitChanges {
    fn changed_files(&self) -> Result<Vec<String>, RipplesError> {
        let command = self.source.command_line()?.current_dir(&self.root);
        let stdout = run_checked(&command)?;
        Ok(parse_path_list(&stdout))
    }
}

/// Top-level directory of the git repository containing `cwd`
pub fn git_root(cwd: &Path) -> Result<PathBuf, RipplesError> {
    let command = CommandLine::new("git", ["rev-parse", "--show-toplevel"]).current_dir(cwd);
    let stdout = run_checked(&command)?;
    let root = stdout.trim();

    if root.is_empty() {
        return Err(RipplesError::OutputParse {
            command: command.to_string(),
            message: "no repository root was printed".to_string(),
        });
    }

    Ok(PathBuf::from(root))
}
