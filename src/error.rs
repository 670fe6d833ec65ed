use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(ripples::config_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct ConfigParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum RipplesError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(ripples::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigParseError(Box<ConfigParseError>),

    #[error("Invalid always-dirty pattern '{pattern}'")]
    #[diagnostic(
        code(ripples::invalid_pattern),
        help("Always-dirty patterns are regular expressions matched against changed paths")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid always-dirty glob '{pattern}'")]
    #[diagnostic(
        code(ripples::invalid_glob),
        help("Always-dirty globs use shell-style wildcards such as '**/package.json'")
    )]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Project '{project}' has location '{location}' which would match every file")]
    #[diagnostic(
        code(ripples::degenerate_location),
        help("Every project must live in a subdirectory of the workspace root")
    )]
    DegenerateLocation { project: String, location: String },

    #[error("Project '{project}' is declared more than once")]
    #[diagnostic(
        code(ripples::duplicate_project),
        help("Project names must be unique within a workspace")
    )]
    DuplicateProject { project: String },

    #[error("Failed to run '{command}'")]
    #[diagnostic(
        code(ripples::command_spawn),
        help("Make sure the program is installed and on your PATH")
    )]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    #[diagnostic(
        code(ripples::command_failed),
        help("Run the command by hand in the workspace root to see the full output")
    )]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Could not understand the output of '{command}': {message}")]
    #[diagnostic(
        code(ripples::output_parse),
        help("The tool may have printed warnings before its JSON output")
    )]
    OutputParse { command: String, message: String },

    #[error("Dependency lookup failed for project '{project}' at '{location}'")]
    #[diagnostic(
        code(ripples::dependency_lookup),
        help("A partial dependency graph would under-report dirty projects, so the run stops here")
    )]
    DependencyLookup {
        project: String,
        location: String,
        #[source]
        source: Box<RipplesError>,
    },

    #[error("Failed to start the dependency lookup pool")]
    #[diagnostic(
        code(ripples::thread_pool),
        help("Try a smaller --parallelism value")
    )]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(ripples::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(ripples::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(ripples::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_config_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = ConfigParseError {
            file: ".ripples.toml".to_string(),
            source_code: NamedSource::new(".ripples.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in '.ripples.toml'");
    }

    #[test]
    fn test_degenerate_location() {
        let error = RipplesError::DegenerateLocation {
            project: "root".to_string(),
            location: "".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Project 'root' has location '' which would match every file"
        );
    }

    #[test]
    fn test_command_failed() {
        let error = RipplesError::CommandFailed {
            command: "git diff --name-only master".to_string(),
            status: "exit status: 128".to_string(),
            stderr: "fatal: bad revision 'master'".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "'git diff --name-only master' exited with exit status: 128: fatal: bad revision \
             'master'"
        );
    }

    #[test]
    fn test_dependency_lookup_keeps_source() {
        use std::error::Error;

        let error = RipplesError::DependencyLookup {
            project: "web".to_string(),
            location: "packages/web".to_string(),
            source: Box::new(RipplesError::OutputParse {
                command: "npm list --json --silent".to_string(),
                message: "expected value".to_string(),
            }),
        };

        assert_eq!(
            error.to_string(),
            "Dependency lookup failed for project 'web' at 'packages/web'"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = RipplesError::FileReadError {
            path: PathBuf::from(".ripples.toml"),
            source: io_err,
        };

        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: RipplesError = json_err.into();

        match err {
            RipplesError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
