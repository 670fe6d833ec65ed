//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::RipplesError;

/// Names of projects considered dirty
///
/// Ordered so that every report built from it is deterministic.
pub type DirtySet = BTreeSet<String>;

/// A single project in the workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    name: String,
    location: String,
    workspace_dependencies: Vec<String>,
}

impl Project {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            workspace_dependencies: Vec::new(),
        }
    }

    /// Attach the workspace dependencies declared by the workspace provider
    ///
    /// Entries may be locations (as yarn reports them) or project names.
    pub fn with_workspace_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.workspace_dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path prefix relative to the workspace root
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn workspace_dependencies(&self) -> &[String] {
        &self.workspace_dependencies
    }

    /// A location that is a prefix of every relative path
    fn has_degenerate_location(&self) -> bool {
        matches!(self.location.trim(), "" | "." | "./" | "/")
    }
}

/// All projects under management, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    projects: BTreeMap<String, Project>,
}

impl Workspace {
    /// Build a workspace, rejecting duplicate names and root-level locations
    pub fn new<I>(projects: I) -> Result<Self, RipplesError>
    where
        I: IntoIterator<Item = Project>,
    {
        let mut by_name = BTreeMap::new();

        for project in projects {
            if project.has_degenerate_location() {
                return Err(RipplesError::DegenerateLocation {
                    project: project.name.clone(),
                    location: project.location.clone(),
                });
            }

            if by_name.contains_key(&project.name) {
                return Err(RipplesError::DuplicateProject {
                    project: project.name,
                });
            }

            by_name.insert(project.name.clone(), project);
        }

        Ok(Self { projects: by_name })
    }

    pub fn get(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.contains_key(name)
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Every project name, i.e. the dirty set when the whole workspace is
    /// invalidated
    pub fn all_projects(&self) -> DirtySet {
        self.projects.keys().cloned().collect()
    }

    /// Find the project living exactly at `location`
    pub fn project_at(&self, location: &str) -> Option<&Project> {
        let location = location.trim_end_matches('/');
        self.projects
            .values()
            .find(|project| project.location.trim_end_matches('/') == location)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
