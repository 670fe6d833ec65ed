//! Subprocess execution shared by the git, yarn and npm providers

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use crate::error::RipplesError;

/// A program invocation with its working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    /// Split a user-supplied command on whitespace
    ///
    /// No shell is involved: quoting, pipes and globbing are not supported.
    pub fn parse(command: &str) -> Result<Self, RipplesError> {
        let mut words = command.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| RipplesError::ConfigurationError {
                message: "The list command is empty".to_string(),
            })?;

        Ok(Self::new(program, words))
    }

    pub fn current_dir(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }
        command
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Run a command and return its raw output whatever the exit status
pub fn run_unchecked(command: &CommandLine) -> Result<Output, RipplesError> {
    debug!(
        "running `{command}` in {}",
        command
            .cwd
            .as_deref()
            .map(|cwd| cwd.display().to_string())
            .unwrap_or_else(|| ".".to_string())
    );

    command
        .to_command()
        .output()
        .map_err(|source| RipplesError::CommandSpawn {
            command: command.to_string(),
            source,
        })
}

/// Run a command and return its stdout, failing on a non-zero exit status
pub fn run_checked(command: &CommandLine) -> Result<String, RipplesError> {
    let output = run_unchecked(command)?;

    if !output.status.success() {
        return Err(RipplesError::CommandFailed {
            command: command.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_whitespace() {
        let command = CommandLine::parse("  git   diff --name-only  origin/main ").unwrap();

        assert_eq!(command.program(), "git");
        assert_eq!(command.args(), ["diff", "--name-only", "origin/main"]);
        assert_eq!(command.to_string(), "git diff --name-only origin/main");
    }

    #[test]
    fn test_parse_rejects_empty_command() {
        assert!(matches!(
            CommandLine::parse("   "),
            Err(RipplesError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_missing_program_is_a_spawn_error() {
        let command = CommandLine::new("ripples-definitely-not-a-real-program", ["--help"]);

        assert!(matches!(
            run_checked(&command),
            Err(RipplesError::CommandSpawn { .. })
        ));
    }
}
