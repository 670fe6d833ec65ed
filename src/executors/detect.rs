//! Executor for dirty project detection

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use crate::cli::{DependencySource, OutputFormat};
use crate::config::DetectConfig;
use crate::detector::DirtyDetector;
use crate::executors::CommandExecutor;
use crate::graph::DependencyGraphBuilder;
use crate::progress::ProgressReporter;
use crate::providers::{
    ChangedFilesProvider, DeclaredDependencies, GitChanges, NpmDependencies, WorkspaceProvider,
    YarnWorkspaces, git_root,
};
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};

pub struct DetectExecutor;

impl CommandExecutor for DetectExecutor {
    type Config = DetectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let mut progress = ProgressReporter::for_terminal();

        let root = resolve_root(config.root.clone())?;
        info!("Using workspace root {}", root.display());

        let workspace = YarnWorkspaces::new(&root)
            .workspace()
            .wrap_err("Failed to list workspace projects")?;
        info!("Found {} workspace projects", workspace.len());

        if let Some(p) = &progress {
            p.collecting_changes(&config.change_source.to_string());
        }
        let changed_files = GitChanges::new(&root, config.change_source.clone())
            .changed_files()
            .wrap_err_with(|| format!("Failed to collect {}", config.change_source))?;
        if let Some(p) = &progress {
            p.finish_changes(changed_files.len());
        }

        let builder = DependencyGraphBuilder::new(config.parallelism);
        let detection = DirtyDetector::new(&workspace, &config.gate)
            .with_transitive(config.transitive)
            .detect(&changed_files, |workspace| match config.dependency_source {
                DependencySource::Npm => {
                    builder.build(workspace, &NpmDependencies::new(&root), progress.as_mut())
                }
                DependencySource::Declared => builder.build(
                    workspace,
                    &DeclaredDependencies::new(workspace),
                    progress.as_mut(),
                ),
            })
            .wrap_err("Failed to detect dirty projects")?;

        if !detection.unmatched_files().is_empty() {
            info!(
                "{} changed files belong to no project",
                detection.unmatched_files().len()
            );
        }

        let report = match config.format {
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&detection)?,
            OutputFormat::Human => {
                HumanReportGenerator::new(config.verbose).generate_report(&detection)?
            }
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(&detection)?,
        };

        if let Some(p) = &progress {
            p.finish_detection(detection.dirty().len(), workspace.len());
        }

        println!("{}", report.trim_end());

        if !detection.unmatched_files().is_empty() && config.format == OutputFormat::Human {
            eprintln!(
                "\n{} Could not map the following files to any project:",
                style("⚠").yellow()
            );
            for file in detection.unmatched_files() {
                eprintln!("  - {file}");
            }
        }

        Ok(())
    }
}

/// The configured root, or the top of the git repository around the
/// current directory
fn resolve_root(configured: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = configured {
        return Ok(root);
    }

    let cwd = std::env::current_dir()
        .into_diagnostic()
        .wrap_err("Failed to read the current directory")?;

    git_root(&cwd).wrap_err("Failed to locate the git repository root")
}
