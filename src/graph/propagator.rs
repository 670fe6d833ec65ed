use std::collections::{HashMap, VecDeque};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use super::types::DependencyGraph;
use crate::core::{DirtySet, Workspace};

/// Dirty set and its size after every full scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTrace {
    pub dirty: DirtySet,
    /// `pass_sizes[0]` is the initial size; the last entry repeats the
    /// previous one because the final pass adds nothing
    pub pass_sizes: Vec<usize>,
}

/// Expands a dirty set to everything that transitively depends on it
///
/// Nodes are workspace projects and edges point from a project to each of
/// its dependencies. Dependency names that are not workspace projects get no
/// node and therefore never take part in propagation.
pub struct DirtyPropagator {
    graph: DiGraph<String, ()>,
    node_indices: HashMap<String, NodeIndex>,
}

impl DirtyPropagator {
    /// Build from `(project, dependencies)` pairs, adding nodes in the order
    /// given
    pub fn new<'a, I, D>(projects: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, D)>,
        D: IntoIterator<Item = &'a String>,
    {
        let projects: Vec<(&str, Vec<&String>)> = projects
            .into_iter()
            .map(|(name, deps)| (name, deps.into_iter().collect()))
            .collect();

        let mut graph = DiGraph::with_capacity(projects.len(), 0);
        let mut node_indices = HashMap::with_capacity(projects.len());

        for (name, _) in &projects {
            node_indices
                .entry(name.to_string())
                .or_insert_with(|| graph.add_node(name.to_string()));
        }

        for (name, deps) in &projects {
            let from = node_indices[*name];
            for dep in deps {
                if let Some(&to) = node_indices.get(dep.as_str()) {
                    graph.update_edge(from, to, ());
                }
            }
        }

        Self {
            graph,
            node_indices,
        }
    }

    /// Propagator over the workspace using the looked-up dependencies
    ///
    /// Projects missing from `dependencies` are treated as having none.
    pub fn from_graph(workspace: &Workspace, dependencies: &DependencyGraph) -> Self {
        Self::new(workspace.projects().map(|project| {
            (
                project.name(),
                dependencies
                    .dependencies_of(project.name())
                    .into_iter()
                    .flatten(),
            )
        }))
    }

    pub fn project_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Worklist search over reverse edges, linear in projects plus edges
    pub fn propagate(&self, initial: &DirtySet) -> DirtySet {
        let mut dirty = initial.clone();
        let mut visited = vec![false; self.graph.node_count()];
        let mut queue = VecDeque::new();

        for name in initial {
            if let Some(&idx) = self.node_indices.get(name) {
                visited[idx.index()] = true;
                queue.push_back(idx);
            }
        }

        while let Some(idx) = queue.pop_front() {
            for dependent in self.graph.neighbors_directed(idx, Direction::Incoming) {
                if visited[dependent.index()] {
                    continue;
                }

                visited[dependent.index()] = true;
                debug!(
                    "  -> Marking {} dirty because it depends on {}",
                    self.graph[dependent], self.graph[idx]
                );
                dirty.insert(self.graph[dependent].clone());
                queue.push_back(dependent);
            }
        }

        dirty
    }

    /// Repeated full scans until a pass adds nothing
    ///
    /// Quadratic per pass; kept as the reference the worklist search must
    /// agree with.
    pub fn propagate_by_scan(&self, initial: &DirtySet) -> ScanTrace {
        let mut dirty = initial.clone();
        let mut pass_sizes = vec![dirty.len()];

        loop {
            let mut found = false;

            for idx in self.graph.node_indices() {
                let name = &self.graph[idx];
                if dirty.contains(name) {
                    continue;
                }

                let depends_on_dirty = self
                    .graph
                    .neighbors_directed(idx, Direction::Outgoing)
                    .any(|dep| dirty.contains(&self.graph[dep]));

                if depends_on_dirty {
                    dirty.insert(name.clone());
                    found = true;
                }
            }

            pass_sizes.push(dirty.len());
            if !found {
                break;
            }
        }

        ScanTrace { dirty, pass_sizes }
    }
}
