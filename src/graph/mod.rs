//! # Dependency Graph Module
//!
//! This module builds the project dependency graph and computes which
//! projects are affected, transitively, by a set of dirty projects.
//!
//! ## Components
//!
//! - **DependencyGraph**: Resolved direct dependencies of every project
//! - **DependencyGraphBuilder**: Queries a dependency provider for every
//!   project on a bounded thread pool
//! - **DirtyPropagator**: Reverse-dependency closure over a petgraph graph
//!
//! ## Example
//!
//! ```
//! use ripples::core::{DirtySet, Project, Workspace};
//! use ripples::graph::{DependencyGraph, DirtyPropagator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let workspace = Workspace::new(vec![
//!     Project::new("core", "packages/core"),
//!     Project::new("ui", "packages/ui"),
//!     Project::new("web", "apps/web"),
//! ])?;
//!
//! let graph: DependencyGraph = vec![
//!     ("core", vec![]),
//!     ("ui", vec!["core"]),
//!     ("web", vec!["ui", "react"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let propagator = DirtyPropagator::from_graph(&workspace, &graph);
//! let dirty = propagator.propagate(&DirtySet::from(["core".to_string()]));
//!
//! assert_eq!(dirty.len(), 3);
//! # Ok(())
//! # }
//! ```

mod builder;
mod propagator;
mod types;

pub use builder::DependencyGraphBuilder;
pub use propagator::{DirtyPropagator, ScanTrace};
pub use types::DependencyGraph;
