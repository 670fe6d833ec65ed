//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::detector::{Detection, Trigger};
use crate::error::RipplesError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, detection: &Detection) -> Result<String, RipplesError> {
        let mut output = String::new();
        let report = detection.report();

        if let Trigger::AlwaysDirty { files } = detection.trigger() {
            writeln!(
                output,
                "::warning title=Whole Workspace Dirty::Changed: {}",
                files.join(", ")
            )?;
        }

        if report.is_empty() {
            writeln!(
                output,
                "::notice title=Dirty Projects::No dirty projects, nothing to rebuild ✅"
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "::notice title=Dirty Projects::{} dirty {}",
            report.len(),
            pluralize("project", report.len())
        )?;

        for project in report.projects() {
            let reason = if detection.directly_dirty().contains(&project.name) {
                "changed"
            } else {
                "dependency changed"
            };
            writeln!(
                output,
                "::notice::  {} ({}) {}",
                project.name, project.path, reason
            )?;
        }

        Ok(output)
    }
}
