//! Report generation modules for different output formats
//!
//! This module contains report generators for the detection result:
//! - json: the `{name: {name, path}}` object consumed by CI scripts
//! - human: Human-readable console output
//! - github: GitHub Actions workflow commands

pub mod github;
pub mod human;
pub mod json;

use crate::detector::Detection;
use crate::error::RipplesError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Render a detection result
    fn generate_report(&self, detection: &Detection) -> Result<String, RipplesError>;
}

pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::analyzer::AlwaysDirtyGate;
    use crate::core::{Project, Workspace};
    use crate::detector::{Detection, DirtyDetector};
    use crate::graph::DependencyGraph;

    pub fn workspace() -> Workspace {
        Workspace::new(vec![
            Project::new("A", "pkg/a"),
            Project::new("B", "pkg/b"),
            Project::new("C", "pkg/c"),
        ])
        .unwrap()
    }

    pub fn detect(workspace: &Workspace, files: &[&str]) -> Detection {
        let gate = AlwaysDirtyGate::with_defaults();
        let files: Vec<String> = files.iter().map(|f| f.to_string()).collect();
        DirtyDetector::new(workspace, &gate)
            .detect(&files, |_| {
                Ok(vec![("A", vec![]), ("B", vec!["A"]), ("C", vec!["B"])]
                    .into_iter()
                    .collect::<DependencyGraph>())
            })
            .unwrap()
    }
}
