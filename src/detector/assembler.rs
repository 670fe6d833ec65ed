use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{DirtySet, Workspace};

/// A dirty project as it appears in the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirtyProject {
    pub name: String,
    pub path: String,
}

/// Dirty projects keyed by name
///
/// Serializes as a bare JSON object, `{}` when nothing is dirty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirtyReport {
    projects: BTreeMap<String, DirtyProject>,
}

impl DirtyReport {
    pub fn get(&self, name: &str) -> Option<&DirtyProject> {
        self.projects.get(name)
    }

    pub fn projects(&self) -> impl Iterator<Item = &DirtyProject> {
        self.projects.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Maps dirty project names back to their workspace locations
pub struct ResultAssembler;

impl ResultAssembler {
    pub fn assemble(workspace: &Workspace, dirty: &DirtySet) -> DirtyReport {
        let projects = dirty
            .iter()
            .filter_map(|name| workspace.get(name))
            .map(|project| {
                (
                    project.name().to_string(),
                    DirtyProject {
                        name: project.name().to_string(),
                        path: project.location().to_string(),
                    },
                )
            })
            .collect();

        DirtyReport { projects }
    }
}
