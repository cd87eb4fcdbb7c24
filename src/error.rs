//! Error handling for unitctl.
use std::{io, path::PathBuf};

use thiserror::Error;

use crate::runner::Subcommand;

/// Defines all possible errors raised while locating or controlling a unit.
#[derive(Debug, Error)]
pub enum UnitError {
    /// A unit directory exists but could not be listed.
    #[error("Failed to list unit directory {}: {source}", .path.display())]
    Filesystem {
        /// The directory being scanned.
        path: PathBuf,
        /// The underlying error that occurred.
        #[source]
        source: io::Error,
    },

    /// No candidate directory holds a unit file with this name.
    #[error("Unit not found: {0}")]
    UnitNotFound(String),

    /// The control command could not be run or reported failure.
    #[error("Failed to run systemctl {subcommand} {unit}: {output} {source}")]
    CommandExecution {
        /// The subcommand that was invoked.
        subcommand: Subcommand,
        /// The unit the subcommand targeted.
        unit: String,
        /// Combined stdout and stderr captured from the command.
        output: String,
        /// What went wrong with the invocation.
        #[source]
        source: ExecFailure,
    },

    /// The control command succeeded but printed something unrecognized.
    #[error("Invalid response from systemctl {subcommand} {unit}: {output}")]
    UnexpectedOutput {
        /// The subcommand that was invoked.
        subcommand: Subcommand,
        /// The unit the subcommand targeted.
        unit: String,
        /// Raw output text.
        output: String,
    },

    /// Error reading a configuration file.
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] io::Error),

    /// Error parsing YAML configuration.
    #[error("Invalid YAML format: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl UnitError {
    /// Captured command output, when the error carries any.
    pub fn output(&self) -> Option<&str> {
        match self {
            UnitError::CommandExecution { output, .. }
            | UnitError::UnexpectedOutput { output, .. } => Some(output.as_str()),
            _ => None,
        }
    }
}

/// Underlying cause of a [`UnitError::CommandExecution`].
#[derive(Debug, Error)]
pub enum ExecFailure {
    /// The process could not be spawned or waited on.
    #[error("{0}")]
    Spawn(#[source] io::Error),
    /// The process ran and exited unsuccessfully. `None` means it was killed
    /// by a signal.
    #[error("{}", describe_exit(.0))]
    Exit(Option<i32>),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
