use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use super::WorkspaceProvider;
use super::process::{CommandLine, run_checked};
use crate::core::{Project, Workspace};
use crate::error::RipplesError;

/// One line of yarn's `--json` reporter output
#[derive(Debug, Deserialize)]
struct YarnEnvelope {
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YarnWorkspaceEntry {
    location: String,
    #[serde(default)]
    workspace_dependencies: Vec<String>,
}

type YarnWorkspaceInfo = BTreeMap<String, YarnWorkspaceEntry>;

/// Workspace projects as reported by `yarn workspaces info`
pub struct YarnWorkspaces {
    root: PathBuf,
}

impl YarnWorkspaces {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn command(&self) -> CommandLine {
        CommandLine::new("yarn", ["workspaces", "info", "--json"]).current_dir(&self.root)
    }
}

impl WorkspaceProvider for YarnWorkspaces {
    fn workspace(&self) -> Result<Workspace, RipplesError> {
        let command = self.command();
        let stdout = run_checked(&command)?;

        let info = parse_workspace_info(&stdout).ok_or_else(|| RipplesError::OutputParse {
            command: command.to_string(),
            message: "expected a JSON object of workspaces".to_string(),
        })?;

        Workspace::new(info.into_iter().map(|(name, entry)| {
            Project::new(name, entry.location)
                .with_workspace_dependencies(entry.workspace_dependencies)
        }))
    }
}

/// Accepts both bare JSON and yarn v1's `{"type":"log","data":"<json>"}`
/// envelope, which may be preceded by other reporter lines.
fn parse_workspace_info(output: &str) -> Option<YarnWorkspaceInfo> {
    let output = output.trim();

    if let Ok(info) = serde_json::from_str::<YarnWorkspaceInfo>(output) {
        return Some(info);
    }

    output
        .lines()
        .filter_map(|line| serde_json::from_str::<YarnEnvelope>(line).ok())
        .find_map(|envelope| serde_json::from_str::<YarnWorkspaceInfo>(&envelope.data).ok())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BARE: &str = r#"{
  "hoist1": {
    "location": "packages/hoist1",
    "workspaceDependencies": ["packages/hoist2"],
    "mismatchedWorkspaceDependencies": []
  },
  "hoist2": {
    "location": "packages/hoist2",
    "workspaceDependencies": [],
    "mismatchedWorkspaceDependencies": []
  },
  "nohoist": {
    "location": "packages/nohoist",
    "workspaceDependencies": ["packages/hoist1", "packages/hoist2"],
    "mismatchedWorkspaceDependencies": []
  }
}"#;

    fn summary(info: &YarnWorkspaceInfo) -> Vec<(&str, &str, usize)> {
        info.iter()
            .map(|(name, entry)| {
                (
                    name.as_str(),
                    entry.location.as_str(),
                    entry.workspace_dependencies.len(),
                )
            })
            .collect()
    }

    #[test]
    fn test_parses_bare_json() {
        let info = parse_workspace_info(BARE).unwrap();

        assert_eq!(
            summary(&info),
            vec![
                ("hoist1", "packages/hoist1", 1),
                ("hoist2", "packages/hoist2", 0),
                ("nohoist", "packages/nohoist", 2),
            ]
        );
    }

    #[test]
    fn test_parses_yarn_v1_envelope() {
        let envelope = serde_json::json!({ "type": "log", "data": BARE }).to_string();
        let output = format!(
            "{}\n{envelope}\n",
            serde_json::json!({ "type": "log", "data": "yarn workspaces v1.22.19" })
        );

        let info = parse_workspace_info(&output).unwrap();
        assert_eq!(info.len(), 3);
        assert_eq!(
            info["nohoist"].workspace_dependencies,
            vec!["packages/hoist1".to_string(), "packages/hoist2".to_string()]
        );
    }

    #[test]
    fn test_missing_dependency_lists_default_to_empty() {
        let info = parse_workspace_info(r#"{"web": {"location": "apps/web"}}"#).unwrap();
        assert!(info["web"].workspace_dependencies.is_empty());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_workspace_info("error Cannot find the root of your workspace").is_none());
        assert!(parse_workspace_info("").is_none());
    }
}
