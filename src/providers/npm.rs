use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use super::DependencyProvider;
use super::process::{CommandLine, run_unchecked};
use crate::core::Project;
use crate::error::RipplesError;

#[derive(Debug, Deserialize)]
struct NpmTree {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    error: Option<NpmError>,
}

#[derive(Debug, Deserialize)]
struct NpmError {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// Resolved dependencies from `npm list --json` in each project directory
///
/// npm exits non-zero for extraneous or missing packages while still
/// printing a usable tree, so the exit status alone does not fail a lookup;
/// unparseable output or an `error` object does.
pub struct NpmDependencies {
    root: PathBuf,
}

impl NpmDependencies {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DependencyProvider for NpmDependencies {
    fn dependencies(&self, project: &Project) -> Result<BTreeSet<String>, RipplesError> {
        let command = CommandLine::new("npm", ["list", "--json", "--silent"])
            .current_dir(self.root.join(project.location()));
        let output = run_unchecked(&command)?;

        if !output.status.success() {
            debug!(
                "`{command}` exited with {} for {}, using its output anyway",
                output.status,
                project.name()
            );
        }

        parse_npm_list(&String::from_utf8_lossy(&output.stdout)).map_err(|message| {
            RipplesError::OutputParse {
                command: command.to_string(),
                message,
            }
        })
    }
}

/// Names of the top-level entries of an `npm list --json` tree
fn parse_npm_list(output: &str) -> Result<BTreeSet<String>, String> {
    let tree: NpmTree = serde_json::from_str(output.trim()).map_err(|e| e.to_string())?;

    if let Some(error) = tree.error {
        return Err(format!(
            "npm reported {}: {}",
            error.code.as_deref().unwrap_or("an error"),
            error.summary.as_deref().unwrap_or("no details")
        ));
    }

    Ok(tree.dependencies.into_keys().collect())
}
