//! # Dirty Project Detection Module
//!
//! This module wires the analysis stages together into a single pure
//! function: given a workspace, the changed files and a way to obtain the
//! dependency graph, it produces the set of dirty projects and the report
//! printed by the CLI.
//!
//! ## Pipeline
//!
//! 1. **AlwaysDirtyGate**: a change to a lockfile or root manifest marks every
//!    project dirty and ends detection
//! 2. **ChangeResolver**: changed files are attributed to the most specific
//!    owning project
//! 3. **DirtyPropagator**: projects that transitively depend on a dirty
//!    project become dirty too
//! 4. **ResultAssembler**: dirty names are mapped back to `{name, path}`
//!
//! ## Example
//!
//! ```
//! use ripples::analyzer::AlwaysDirtyGate;
//! use ripples::core::{Project, Workspace};
//! use ripples::detector::DirtyDetector;
//! use ripples::graph::DependencyGraph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let workspace = Workspace::new(vec![
//!     Project::new("A", "pkg/a"),
//!     Project::new("B", "pkg/b"),
//!     Project::new("C", "pkg/c"),
//! ])?;
//! let gate = AlwaysDirtyGate::with_defaults();
//!
//! let detection = DirtyDetector::new(&workspace, &gate).detect(
//!     &["pkg/b/index.ts".to_string()],
//!     |_| Ok(vec![("B", vec!["A"]), ("C", vec!["B"])].into_iter().collect::<DependencyGraph>()),
//! )?;
//!
//! assert_eq!(
//!     serde_json::to_string(detection.report())?,
//!     r#"{"B":{"name":"B","path":"pkg/b"},"C":{"name":"C","path":"pkg/c"}}"#
//! );
//! # Ok(())
//! # }
//! ```

mod assembler;
mod detector_impl;

pub use assembler::{DirtyProject, DirtyReport, ResultAssembler};
pub use detector_impl::{Detection, DirtyDetector, Trigger};
