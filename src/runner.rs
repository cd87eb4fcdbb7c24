//! Execution boundary for the service-control command.
//!
//! Every query and mutation funnels through [`CommandRunner::run`], which
//! invokes one subcommand against one unit and hands back the combined output.
//! [`SystemctlRunner`] spawns the real binary; tests plug in their own runner.
use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::debug;

use crate::config::Config;

/// Verbs understood by the control command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Subcommand {
    /// Report whether the unit is running.
    IsActive,
    /// Report whether the unit starts at boot.
    IsEnabled,
    /// Hook the unit into its install targets.
    Enable,
    /// Remove the unit from its install targets.
    Disable,
    Start,
    Stop,
    Restart,
    /// Ask the unit to re-read its configuration without restarting.
    Reload,
}

impl Subcommand {
    /// Returns `true` for verbs that change unit state.
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::IsActive | Self::IsEnabled)
    }
}

/// Result of one control-command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the command exited with status 0.
    pub success: bool,
    /// The exit code, if the process was not killed by a signal.
    pub exit_code: Option<i32>,
    /// Stdout followed by stderr, decoded lossily.
    pub combined: String,
}

impl CommandOutput {
    /// Builds a successful result carrying `combined` as output.
    pub fn success(combined: impl Into<String>) -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            combined: combined.into(),
        }
    }

    /// Builds a failed result with the given exit code.
    pub fn failure(exit_code: i32, combined: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code: Some(exit_code),
            combined: combined.into(),
        }
    }

    fn from_output(output: Output) -> Self {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Self {
            success: output.status.success(),
            exit_code: output.status.code(),
            combined,
        }
    }
}

/// Runs a subcommand against a unit.
///
/// An `Err` means the command could not be run at all; a command that ran and
/// failed is reported through [`CommandOutput::success`].
pub trait CommandRunner {
    /// Runs `subcommand` against `unit` and waits for it to finish.
    fn run(&self, subcommand: Subcommand, unit: &str) -> io::Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, subcommand: Subcommand, unit: &str) -> io::Result<CommandOutput> {
        (**self).run(subcommand, unit)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for Box<R> {
    fn run(&self, subcommand: Subcommand, unit: &str) -> io::Result<CommandOutput> {
        (**self).run(subcommand, unit)
    }
}

/// Spawns the control command as `<program> [args..] <subcommand> <unit>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemctlRunner {
    program: PathBuf,
    leading_args: Vec<String>,
}

impl SystemctlRunner {
    /// Creates a runner for the given program with no leading arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Creates a runner from the command settings in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.systemctl_path).with_args(config.systemctl_args.iter())
    }

    /// Appends arguments placed before the subcommand (e.g. `--user`).
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.leading_args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Path of the program this runner spawns.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for SystemctlRunner {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl CommandRunner for SystemctlRunner {
    fn run(&self, subcommand: Subcommand, unit: &str) -> io::Result<CommandOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args)
            .arg(subcommand.as_ref())
            .arg(unit)
            .stdin(Stdio::null());

        debug!("Executing command: {cmd:?}");
        let output = cmd.output()?;
        let result = CommandOutput::from_output(output);
        debug!(
            "`{subcommand} {unit}` finished (exit code: {:?})",
            result.exit_code
        );
        Ok(result)
    }
}
