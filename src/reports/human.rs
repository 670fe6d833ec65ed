//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::{Detection, Trigger};
use crate::error::RipplesError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    show_files: bool,
}

impl HumanReportGenerator {
    /// `show_files` lists which changed file made each project dirty
    pub fn new(show_files: bool) -> Self {
        Self { show_files }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detection: &Detection) -> Result<String, RipplesError> {
        let mut output = String::new();
        let report = detection.report();

        writeln!(
            output,
            "\n📁 Analyzed {} changed {}",
            detection.changed_file_count(),
            pluralize("file", detection.changed_file_count())
        )?;

        if let Trigger::AlwaysDirty { files } = detection.trigger() {
            writeln!(
                output,
                "\n{} Whole workspace is dirty because of: {}",
                style("⚠").yellow().bold(),
                style(files.join(", ")).yellow()
            )?;
        }

        if report.is_empty() {
            write!(
                output,
                "\n{} No dirty projects. Nothing to rebuild.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "\n🎯 Directly dirty ({}):",
            detection.directly_dirty().len()
        )?;
        for name in detection.directly_dirty() {
            if let Some(project) = report.get(name) {
                writeln!(
                    output,
                    "  {} {} {}",
                    style("•").dim(),
                    style(&project.name).bold(),
                    style(&project.path).dim()
                )?;
            }

            if self.show_files {
                for assignment in detection
                    .assignments()
                    .iter()
                    .filter(|a| &a.project == name)
                {
                    writeln!(output, "      {} {}", style("←").dim(), assignment.file)?;
                }
            }
        }

        let indirect: Vec<&str> = detection.indirectly_dirty().collect();
        if !indirect.is_empty() {
            writeln!(output, "\n🌊 Dirty through dependencies ({}):", indirect.len())?;
            for name in indirect {
                if let Some(project) = report.get(name) {
                    writeln!(
                        output,
                        "  {} {} {}",
                        style("•").dim(),
                        style(&project.name).bold(),
                        style(&project.path).dim()
                    )?;
                }
            }
        }

        writeln!(
            output,
            "\n{} {} dirty {}",
            style("📊").cyan(),
            style(report.len()).yellow().bold(),
            pluralize("project", report.len())
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures;

    #[test]
    fn test_human_report_lists_direct_and_indirect() {
        let workspace = fixtures::workspace();
        let detection = fixtures::detect(&workspace, &["pkg/b/index.ts", "docs/intro.md"]);

        let report = HumanReportGenerator::new(true)
            .generate_report(&detection)
            .unwrap();

        assert!(report.contains("Analyzed 2 changed files"));
        assert!(report.contains("Directly dirty (1)"));
        assert!(report.contains("pkg/b/index.ts"));
        assert!(report.contains("Dirty through dependencies (1)"));
        assert!(report.contains("pkg/c"));
        assert!(!report.contains("pkg/a"));
    }

    #[test]
    fn test_human_report_nothing_dirty() {
        let workspace = fixtures::workspace();
        let detection = fixtures::detect(&workspace, &["README.md"]);

        let report = HumanReportGenerator::new(false)
            .generate_report(&detection)
            .unwrap();

        assert!(report.contains("No dirty projects"));
        assert!(report.contains("Analyzed 1 changed file"));
    }

    #[test]
    fn test_human_report_always_dirty() {
        let workspace = fixtures::workspace();
        let detection = fixtures::detect(&workspace, &["yarn.lock"]);

        let report = HumanReportGenerator::new(false)
            .generate_report(&detection)
            .unwrap();

        assert!(report.contains("Whole workspace is dirty"));
        assert!(report.contains("yarn.lock"));
        assert!(report.contains("Directly dirty (3)"));
    }
}
