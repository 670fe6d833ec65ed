use std::collections::BTreeSet;

use super::DependencyProvider;
use crate::core::{Project, Workspace};
use crate::error::RipplesError;

/// Dependencies taken from the workspace manifest instead of the installed tree
///
/// yarn reports workspace dependencies by location; each entry is mapped back
/// to the project living there. Entries that are already project names are
/// kept, and anything else passes through untouched for propagation to ignore.
pub struct DeclaredDependencies<'a> {
    workspace: &'a Workspace,
}

impl<'a> DeclaredDependencies<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        Self { workspace }
    }

    fn resolve(&self, entry: &str) -> String {
        if self.workspace.contains(entry) {
            return entry.to_string();
        }

        self.workspace
            .project_at(entry.trim_start_matches("./"))
            .map(|project| project.name().to_string())
            .unwrap_or_else(|| entry.to_string())
    }
}

impl DependencyProvider for DeclaredDependencies<'_> {
    fn dependencies(&self, project: &Project) -> Result<BTreeSet<String>, RipplesError> {
        Ok(project
            .workspace_dependencies()
            .iter()
            .map(|entry| self.resolve(entry))
            .collect())
    }
}
