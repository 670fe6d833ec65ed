//! # Ripples - Find Dirty Projects in JavaScript Monorepos
//!
//! Ripples decides which projects of a yarn workspace have to be rebuilt or
//! retested after a change. Changed files are attributed to the project that
//! owns them, then the change ripples out to every project that depends on a
//! dirty one, directly or through other projects.
//!
//! ## Main Components
//!
//! - **Analyzer**: Attributes changed files to projects and detects changes
//!   that invalidate the whole workspace
//! - **Graph**: Looks up project dependencies with bounded concurrency and
//!   propagates dirtiness along reverse dependencies
//! - **Detector**: Runs the pipeline and assembles the `{name: {name, path}}`
//!   result
//! - **Providers**: git, yarn and npm as sources of changed files, projects
//!   and dependencies
//! - **Reports**: JSON, human-readable and GitHub Actions output
//!
//! ## Usage
//!
//! ### Detecting against an in-memory workspace
//!
//! ```
//! use ripples::analyzer::AlwaysDirtyGate;
//! use ripples::core::{Project, Workspace};
//! use ripples::detector::DirtyDetector;
//! use ripples::graph::DependencyGraph;
//! use ripples::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let workspace = Workspace::new(vec![
//!     Project::new("design-system", "packages/design-system"),
//!     Project::new("checkout", "apps/checkout"),
//!     Project::new("docs", "apps/docs"),
//! ])?;
//!
//! let gate = AlwaysDirtyGate::with_defaults();
//! let changed = vec!["packages/design-system/src/button.tsx".to_string()];
//!
//! let detection = DirtyDetector::new(&workspace, &gate).detect(&changed, |_| {
//!     Ok(vec![
//!         ("design-system", vec![]),
//!         ("checkout", vec!["design-system", "react"]),
//!         ("docs", vec![]),
//!     ]
//!     .into_iter()
//!     .collect::<DependencyGraph>())
//! })?;
//!
//! let json = JsonReportGenerator::new().generate_report(&detection)?;
//! assert_eq!(
//!     json,
//!     r#"{"checkout":{"name":"checkout","path":"apps/checkout"},"design-system":{"name":"design-system","path":"packages/design-system"}}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Looking up dependencies from the installed tree
//!
//! ```no_run
//! use ripples::analyzer::AlwaysDirtyGate;
//! use ripples::detector::DirtyDetector;
//! use ripples::graph::DependencyGraphBuilder;
//! use ripples::providers::{
//!     ChangeSource, ChangedFilesProvider, GitChanges, NpmDependencies, WorkspaceProvider,
//!     YarnWorkspaces,
//! };
//!
//! # fn main() -> miette::Result<()> {
//! let root = "/path/to/monorepo";
//! let workspace = YarnWorkspaces::new(root).workspace()?;
//! let changed = GitChanges::new(
//!     root,
//!     ChangeSource::Diff {
//!         base: "origin/main".to_string(),
//!     },
//! )
//! .changed_files()?;
//!
//! let gate = AlwaysDirtyGate::with_defaults();
//! let builder = DependencyGraphBuilder::new(8);
//! let detection = DirtyDetector::new(&workspace, &gate).detect(&changed, |workspace| {
//!     builder.build(workspace, &NpmDependencies::new(root), None)
//! })?;
//!
//! for name in detection.dirty() {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod logging;
pub mod providers;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::config::{DetectConfig, FileConfig};
    use crate::executors::{CommandExecutor, DetectExecutor};

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let file = FileConfig::load_or_default(&cli.config);
    let config = DetectConfig::from_cli(&cli, file)?;

    DetectExecutor::execute(config)
}
