use glob::{MatchOptions, Pattern};
use regex::Regex;

use crate::constants::detect::DEFAULT_ALWAYS_DIRTY_PATTERN;
use crate::core::{DirtySet, Workspace};
use crate::error::RipplesError;

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A matcher for files whose change invalidates the whole workspace
#[derive(Debug, Clone)]
pub enum DirtyPattern {
    /// Regular expression searched in the changed path
    Regex(Regex),
    /// Shell-style glob matched against the whole changed path
    Glob(Pattern),
}

impl DirtyPattern {
    pub fn regex(pattern: &str) -> Result<Self, RipplesError> {
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|source| RipplesError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn glob(pattern: &str) -> Result<Self, RipplesError> {
        Pattern::new(pattern)
            .map(Self::Glob)
            .map_err(|source| RipplesError::InvalidGlob {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Regex(regex) => regex.is_match(path),
            Self::Glob(glob) => glob.matches_with(path, GLOB_OPTIONS),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Regex(regex) => regex.as_str(),
            Self::Glob(glob) => glob.as_str(),
        }
    }
}

/// Short-circuits detection when an always-dirty file changed
#[derive(Debug, Clone, Default)]
pub struct AlwaysDirtyGate {
    patterns: Vec<DirtyPattern>,
}

impl AlwaysDirtyGate {
    pub fn new(patterns: Vec<DirtyPattern>) -> Self {
        Self { patterns }
    }

    /// Gate with the built-in manifest/lockfile pattern
    pub fn with_defaults() -> Self {
        let default = DirtyPattern::regex(DEFAULT_ALWAYS_DIRTY_PATTERN)
            .expect("Default always-dirty pattern should be valid");
        Self::new(vec![default])
    }

    pub fn patterns(&self) -> &[DirtyPattern] {
        &self.patterns
    }

    pub fn check(&self, changed_files: &[String]) -> bool {
        changed_files.iter().any(|file| self.is_always_dirty(file))
    }

    /// The changed files that tripped the gate, in input order
    pub fn triggering_files<'f>(&self, changed_files: &'f [String]) -> Vec<&'f str> {
        changed_files
            .iter()
            .filter(|file| self.is_always_dirty(file))
            .map(String::as_str)
            .collect()
    }

    pub fn all_projects(&self, workspace: &Workspace) -> DirtySet {
        workspace.all_projects()
    }

    fn is_always_dirty(&self, file: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Project;

    fn files(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_default_gate_matches_root_lockfiles() {
        let gate = AlwaysDirtyGate::with_defaults();

        assert_eq!(gate.patterns().len(), 1);
        assert_eq!(gate.patterns()[0].as_str(), DEFAULT_ALWAYS_DIRTY_PATTERN);
        assert!(gate.check(&files(&["yarn.lock"])));
        assert!(gate.check(&files(&["src/app.ts", "package.json"])));
        assert!(!gate.check(&files(&["packages/web/package.json"])));
        assert!(!gate.check(&files(&["README.md"])));
    }

    #[test]
    fn test_triggering_files_preserve_order() {
        let gate = AlwaysDirtyGate::with_defaults();
        let changed = files(&["tsconfig.json", "pkg/a/x.ts", "yarn.lock"]);

        assert_eq!(
            gate.triggering_files(&changed),
            vec!["tsconfig.json", "yarn.lock"]
        );
    }

    #[test]
    fn test_glob_patterns_respect_separators() {
        let gate = AlwaysDirtyGate::new(vec![
            DirtyPattern::glob("*.config.js").unwrap(),
            DirtyPattern::glob("tools/**/*.sh").unwrap(),
        ]);

        assert!(gate.check(&files(&["babel.config.js"])));
        assert!(!gate.check(&files(&["pkg/a/babel.config.js"])));
        assert!(gate.check(&files(&["tools/ci/release/publish.sh"])));
    }

    #[test]
    fn test_invalid_patterns_are_reported() {
        assert!(matches!(
            DirtyPattern::regex("(unclosed"),
            Err(RipplesError::InvalidPattern { .. })
        ));
        assert!(matches!(
            DirtyPattern::glob("[unclosed"),
            Err(RipplesError::InvalidGlob { .. })
        ));
    }

    #[test]
    fn test_empty_gate_never_fires() {
        let gate = AlwaysDirtyGate::default();
        assert!(!gate.check(&files(&["yarn.lock"])));
    }

    #[test]
    fn test_all_projects() {
        let workspace = Workspace::new(vec![
            Project::new("a", "pkg/a"),
            Project::new("b", "pkg/b"),
        ])
        .unwrap();

        let gate = AlwaysDirtyGate::with_defaults();
        assert_eq!(gate.all_projects(&workspace), workspace.all_projects());
    }
}
