use tracing::{debug, info};

use super::assembler::{DirtyReport, ResultAssembler};
use crate::analyzer::{AlwaysDirtyGate, ChangeResolver, FileAssignment};
use crate::core::{DirtySet, Workspace};
use crate::error::RipplesError;
use crate::graph::{DependencyGraph, DirtyPropagator};

/// Why the projects in a [`Detection`] are dirty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// An always-dirty file changed and the whole workspace was invalidated
    AlwaysDirty { files: Vec<String> },
    /// Changed files were attributed to projects
    ChangedFiles,
}

/// Result of a detection run
#[derive(Debug, Clone)]
pub struct Detection {
    trigger: Trigger,
    changed_files: usize,
    direct: DirtySet,
    dirty: DirtySet,
    assignments: Vec<FileAssignment>,
    unmatched: Vec<String>,
    report: DirtyReport,
}

impl Detection {
    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    pub fn changed_file_count(&self) -> usize {
        self.changed_files
    }

    /// Projects that own a changed file (the whole workspace when the
    /// always-dirty gate fired)
    pub fn directly_dirty(&self) -> &DirtySet {
        &self.direct
    }

    /// Every dirty project, including those dirty only through dependencies
    pub fn dirty(&self) -> &DirtySet {
        &self.dirty
    }

    pub fn indirectly_dirty(&self) -> impl Iterator<Item = &str> {
        self.dirty
            .difference(&self.direct)
            .map(String::as_str)
    }

    pub fn assignments(&self) -> &[FileAssignment] {
        &self.assignments
    }

    pub fn unmatched_files(&self) -> &[String] {
        &self.unmatched
    }

    pub fn report(&self) -> &DirtyReport {
        &self.report
    }

    pub fn into_report(self) -> DirtyReport {
        self.report
    }
}

/// Runs the detection pipeline over an in-memory workspace
///
/// changed files → always-dirty gate → change resolver → propagation →
/// result assembly. The dependency graph is requested lazily and only when
/// propagation actually needs it.
pub struct DirtyDetector<'a> {
    workspace: &'a Workspace,
    gate: &'a AlwaysDirtyGate,
    transitive: bool,
}

impl<'a> DirtyDetector<'a> {
    pub fn new(workspace: &'a Workspace, gate: &'a AlwaysDirtyGate) -> Self {
        Self {
            workspace,
            gate,
            transitive: true,
        }
    }

    /// Disable to report only the projects owning changed files
    pub fn with_transitive(mut self, transitive: bool) -> Self {
        self.transitive = transitive;
        self
    }

    /// Detect dirty projects for `changed_files`
    ///
    /// `load_dependencies` is called at most once. It is skipped when the
    /// gate fires, when propagation is disabled, or when no project owns a
    /// changed file; any error it returns aborts detection.
    pub fn detect<F>(
        &self,
        changed_files: &[String],
        load_dependencies: F,
    ) -> Result<Detection, RipplesError>
    where
        F: FnOnce(&Workspace) -> Result<DependencyGraph, RipplesError>,
    {
        let triggering = self.gate.triggering_files(changed_files);
        if !triggering.is_empty() {
            info!(
                "Detected always-dirty file changes, assuming whole workspace is dirty: {}",
                triggering.join(", ")
            );

            let all = self.gate.all_projects(self.workspace);
            return Ok(self.finish(
                Trigger::AlwaysDirty {
                    files: triggering.into_iter().map(str::to_string).collect(),
                },
                changed_files.len(),
                all.clone(),
                all,
                Vec::new(),
                Vec::new(),
            ));
        }

        let resolution = ChangeResolver::new(self.workspace).resolve(changed_files);
        let assignments = resolution.assignments().to_vec();
        let unmatched = resolution.unmatched().to_vec();
        let direct = resolution.into_dirty();

        if !direct.is_empty() {
            debug!(
                "Dirty projects by default: {}",
                direct.iter().cloned().collect::<Vec<_>>().join(", ")
            );
        }

        let dirty = if !self.transitive || direct.is_empty() {
            direct.clone()
        } else {
            let dependencies = load_dependencies(self.workspace)?;
            DirtyPropagator::from_graph(self.workspace, &dependencies).propagate(&direct)
        };

        Ok(self.finish(
            Trigger::ChangedFiles,
            changed_files.len(),
            direct,
            dirty,
            assignments,
            unmatched,
        ))
    }

    fn finish(
        &self,
        trigger: Trigger,
        changed_files: usize,
        direct: DirtySet,
        dirty: DirtySet,
        assignments: Vec<FileAssignment>,
        unmatched: Vec<String>,
    ) -> Detection {
        let report = ResultAssembler::assemble(self.workspace, &dirty);
        Detection {
            trigger,
            changed_files,
            direct,
            dirty,
            assignments,
            unmatched,
            report,
        }
    }
}
