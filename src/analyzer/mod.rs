//! # Change Analysis Module
//!
//! This module turns a list of changed files into the set of projects that
//! are directly dirty.
//!
//! ## Key Components
//!
//! - **ChangeResolver**: Attributes each changed file to the most specific
//!   project whose location is a prefix of it
//! - **AlwaysDirtyGate**: Detects changes to files that invalidate the whole
//!   workspace (lockfiles, root manifests)
//!
//! ## Example
//!
//! ```
//! use ripples::analyzer::{AlwaysDirtyGate, ChangeResolver};
//! use ripples::core::{Project, Workspace};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let workspace = Workspace::new(vec![
//!     Project::new("app", "pkg/app"),
//!     Project::new("app-plugin", "pkg/app/plugin"),
//! ])?;
//!
//! let changed = vec!["pkg/app/plugin/index.ts".to_string(), "README.md".to_string()];
//!
//! let gate = AlwaysDirtyGate::with_defaults();
//! assert!(!gate.check(&changed));
//!
//! let resolution = ChangeResolver::new(&workspace).resolve(&changed);
//! assert!(resolution.dirty().contains("app-plugin"));
//! assert!(!resolution.dirty().contains("app"));
//! assert_eq!(resolution.unmatched(), ["README.md".to_string()]);
//! # Ok(())
//! # }
//! ```

mod always_dirty;
mod change_resolver;

pub use always_dirty::{AlwaysDirtyGate, DirtyPattern};
pub use change_resolver::{ChangeResolver, FileAssignment, Resolution};
