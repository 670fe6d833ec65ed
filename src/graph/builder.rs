use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use tracing::debug;

use super::types::DependencyGraph;
use crate::core::{Project, Workspace};
use crate::error::RipplesError;
use crate::progress::ProgressReporter;
use crate::providers::DependencyProvider;

/// Builds the dependency graph by querying every project concurrently
///
/// Lookups run on a dedicated thread pool sized to the configured
/// parallelism, which bounds how many external processes exist at once.
pub struct DependencyGraphBuilder {
    parallelism: usize,
}

impl DependencyGraphBuilder {
    /// # Arguments
    /// * `parallelism` - Maximum number of lookups in flight, at least 1
    pub fn new(parallelism: usize) -> Self {
        Self {
            parallelism: parallelism.max(1),
        }
    }

    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    /// Look up the dependencies of every project in `workspace`
    ///
    /// The first failed lookup fails the whole build: lookups not yet started
    /// are skipped and no partial graph is returned.
    pub fn build<P>(
        &self,
        workspace: &Workspace,
        provider: &P,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<DependencyGraph, RipplesError>
    where
        P: DependencyProvider + ?Sized,
    {
        let projects: Vec<&Project> = workspace.projects().collect();
        let bar = progress
            .as_deref_mut()
            .map(|p| p.start_dependency_lookup(projects.len()));

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.parallelism)
            .thread_name(|i| format!("ripples-lookup-{i}"))
            .build()?;

        let result: Result<BTreeMap<String, BTreeSet<String>>, RipplesError> =
            pool.install(|| {
                projects
                    .par_iter()
                    .map(|project| {
                        debug!("processing {}...", project.name());

                        let dependencies = provider.dependencies(project).map_err(|source| {
                            RipplesError::DependencyLookup {
                                project: project.name().to_string(),
                                location: project.location().to_string(),
                                source: Box::new(source),
                            }
                        })?;

                        if let Some(bar) = &bar {
                            bar.set_message(format!("Looked up {}", project.name()));
                            bar.inc(1);
                        }

                        Ok((project.name().to_string(), dependencies))
                    })
                    .collect()
            });

        if let Some(p) = progress {
            p.finish_dependency_lookup();
        }

        result.map(DependencyGraph::from)
    }
}
