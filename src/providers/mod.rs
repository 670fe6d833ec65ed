//! # Collaborator Providers
//!
//! Detection consumes three kinds of external data: the list of changed files,
//! the projects of the workspace, and each project's resolved dependencies.
//! Each is behind a small trait so the detection core can run against
//! in-memory data in tests and against git, yarn and npm in the CLI.
//!
//! Every provider failure is fatal to the run; none of them retry.

mod declared;
mod git;
mod npm;
mod process;
mod yarn;

use std::collections::BTreeSet;

pub use declared::DeclaredDependencies;
pub use git::{ChangeSource, GitChanges, git_root};
pub use npm::NpmDependencies;
pub use process::{CommandLine, run_checked, run_unchecked};
pub use yarn::YarnWorkspaces;

use crate::core::{Project, Workspace};
use crate::error::RipplesError;

/// Source of the changed file list
pub trait ChangedFilesProvider {
    /// Paths relative to the workspace root, in the order reported
    fn changed_files(&self) -> Result<Vec<String>, RipplesError>;
}

/// Source of the workspace projects
pub trait WorkspaceProvider {
    fn workspace(&self) -> Result<Workspace, RipplesError>;
}

/// Source of a project's resolved direct dependencies
///
/// Lookups for different projects run concurrently, hence `Sync`.
pub trait DependencyProvider: Sync {
    fn dependencies(&self, project: &Project) -> Result<BTreeSet<String>, RipplesError>;
}

/// Split command output into paths, dropping blank lines
pub(crate) fn parse_path_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
