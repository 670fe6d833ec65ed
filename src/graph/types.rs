//! Core graph types
//!
//! This module contains the fundamental data structures used in the dependency
//! graph.

use std::collections::{BTreeMap, BTreeSet};

/// Resolved direct dependencies of every project, keyed by project name
///
/// Built from the dependency provider, so it reflects what is actually
/// installed rather than what the workspace declares. Names that are not
/// projects of the workspace are kept here and ignored during propagation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    dependencies: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, project: impl Into<String>, dependencies: BTreeSet<String>) {
        self.dependencies.insert(project.into(), dependencies);
    }

    pub fn dependencies_of(&self, project: &str) -> Option<&BTreeSet<String>> {
        self.dependencies.get(project)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl From<BTreeMap<String, BTreeSet<String>>> for DependencyGraph {
    fn from(dependencies: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { dependencies }
    }
}

impl<N, D, S> FromIterator<(N, D)> for DependencyGraph
where
    N: Into<String>,
    D: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, D)>>(iter: T) -> Self {
        let dependencies = iter
            .into_iter()
            .map(|(name, deps)| (name.into(), deps.into_iter().map(Into::into).collect()))
            .collect();
        Self { dependencies }
    }
}
