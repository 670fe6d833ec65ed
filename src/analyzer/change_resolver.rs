use tracing::debug;

use crate::core::{DirtySet, Project, Workspace};

/// A changed file and the project it was attributed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAssignment {
    pub file: String,
    pub project: String,
}

/// Outcome of attributing changed files to projects
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    dirty: DirtySet,
    assignments: Vec<FileAssignment>,
    unmatched: Vec<String>,
}

impl Resolution {
    /// Projects owning at least one changed file
    pub fn dirty(&self) -> &DirtySet {
        &self.dirty
    }

    pub fn assignments(&self) -> &[FileAssignment] {
        &self.assignments
    }

    /// Changed files outside every project location, in input order
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    pub fn into_dirty(self) -> DirtySet {
        self.dirty
    }
}

/// Attributes changed files to projects by longest location prefix
///
/// Projects are visited from the longest location to the shortest and every
/// file is consumed by the first project that claims it, so a file under a
/// nested project never also dirties the enclosing one.
pub struct ChangeResolver<'a> {
    ordered: Vec<&'a Project>,
}

impl<'a> ChangeResolver<'a> {
    pub fn new(workspace: &'a Workspace) -> Self {
        let mut ordered: Vec<&Project> = workspace.projects().collect();
        ordered.sort_by(|a, b| {
            b.location()
                .len()
                .cmp(&a.location().len())
                .then_with(|| a.name().cmp(b.name()))
        });

        Self { ordered }
    }

    pub fn resolve(&self, changed_files: &[String]) -> Resolution {
        let mut remaining: Vec<&str> = changed_files.iter().map(String::as_str).collect();
        let mut resolution = Resolution::default();

        for project in &self.ordered {
            let location = project.location();

            // Literal prefix, not segment-aware: "pkg/a" also claims "pkg/ab/x"
            remaining.retain(|file| {
                if !file.starts_with(location) {
                    return true;
                }

                debug!("  -> {location}: {file}");
                resolution.dirty.insert(project.name().to_string());
                resolution.assignments.push(FileAssignment {
                    file: file.to_string(),
                    project: project.name().to_string(),
                });
                false
            });

            if remaining.is_empty() {
                break;
            }
        }

        resolution.unmatched = remaining.into_iter().map(str::to_string).collect();
        resolution
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn files(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    fn names(set: &DirtySet) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    fn nested_workspace() -> Workspace {
        Workspace::new(vec![
            Project::new("a", "pkg/a"),
            Project::new("a-sub", "pkg/a/sub"),
            Project::new("b", "pkg/b"),
        ])
        .unwrap()
    }

    #[test]
    fn test_longest_prefix_wins() {
        let workspace = nested_workspace();
        let resolution = ChangeResolver::new(&workspace).resolve(&files(&["pkg/a/sub/x.ts"]));

        assert_eq!(names(resolution.dirty()), vec!["a-sub"]);
        assert_eq!(
            resolution.assignments(),
            [FileAssignment {
                file: "pkg/a/sub/x.ts".to_string(),
                project: "a-sub".to_string(),
            }]
        );
    }

    #[test]
    fn test_parent_and_child_both_dirty_with_separate_files() {
        let workspace = nested_workspace();
        let resolution = ChangeResolver::new(&workspace)
            .resolve(&files(&["pkg/a/index.ts", "pkg/a/sub/x.ts"]));

        assert_eq!(names(resolution.dirty()), vec!["a", "a-sub"]);
        assert!(resolution.unmatched().is_empty());
    }

    #[test]
    fn test_unmatched_files_are_dropped() {
        let workspace = nested_workspace();
        let resolution =
            ChangeResolver::new(&workspace).resolve(&files(&["README.md", "docs/intro.md"]));

        assert!(resolution.dirty().is_empty());
        assert_eq!(resolution.unmatched(), files(&["README.md", "docs/intro.md"]));
    }

    #[test]
    fn test_prefix_is_literal() {
        let workspace = nested_workspace();
        let resolution = ChangeResolver::new(&workspace).resolve(&files(&["pkg/bar/x.ts"]));

        assert_eq!(names(resolution.dirty()), vec!["b"]);
    }

    #[test]
    fn test_duplicate_paths_are_attributed_to_one_project() {
        let workspace = nested_workspace();
        let resolution = ChangeResolver::new(&workspace)
            .resolve(&files(&["pkg/a/sub/x.ts", "pkg/a/sub/x.ts"]));

        assert_eq!(names(resolution.dirty()), vec!["a-sub"]);
        assert!(
            resolution
                .assignments()
                .iter()
                .all(|assignment| assignment.project == "a-sub")
        );
    }

    #[test]
    fn test_empty_changeset() {
        let workspace = nested_workspace();
        let resolution = ChangeResolver::new(&workspace).resolve(&[]);

        assert!(resolution.dirty().is_empty());
        assert!(resolution.unmatched().is_empty());
    }
}
