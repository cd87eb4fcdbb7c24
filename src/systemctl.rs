//! Client that resolves units and drives the control command.
use std::str::FromStr;

use tracing::debug;

use crate::{
    config::{Config, OutputMatching},
    constants::{ACTIVE_RESPONSE, DISABLED_RESPONSE, ENABLED_RESPONSE, INACTIVE_RESPONSE},
    error::{ExecFailure, UnitError},
    locator::UnitLocator,
    runner::{CommandOutput, CommandRunner, Subcommand, SystemctlRunner},
    service::Service,
    state::{ActiveState, EnablementState},
};

/// Whether a mutation confirms the unit exists before invoking the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExistenceCheck {
    /// Scan the unit directories first and fail with
    /// [`UnitError::UnitNotFound`] if the unit is absent.
    Required,
    /// The caller already resolved the unit.
    Skip,
}

/// Entry point for querying and controlling units.
///
/// Holds the unit locator, the command runner and the output matching
/// policy. [`Systemctl::unit`] hands out [`Service`] handles; the `*_service`
/// methods act on a bare name instead.
#[derive(Debug, Clone)]
pub struct Systemctl<R = SystemctlRunner> {
    locator: UnitLocator,
    runner: R,
    output_matching: OutputMatching,
}

impl Systemctl<SystemctlRunner> {
    /// Builds a client that spawns the configured control command.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            UnitLocator::from_config(config),
            SystemctlRunner::from_config(config),
        )
        .with_output_matching(config.output_matching)
    }
}

impl Default for Systemctl<SystemctlRunner> {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl<R: CommandRunner> Systemctl<R> {
    /// Builds a client from its parts with exact output matching.
    pub fn new(locator: UnitLocator, runner: R) -> Self {
        Self {
            locator,
            runner,
            output_matching: OutputMatching::Exact,
        }
    }

    /// Overrides how query output is compared.
    pub fn with_output_matching(mut self, output_matching: OutputMatching) -> Self {
        self.output_matching = output_matching;
        self
    }

    /// Locator used to resolve unit names.
    pub fn locator(&self) -> &UnitLocator {
        &self.locator
    }

    /// Runner every control command goes through.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Policy applied to `is-active` and `is-enabled` output.
    pub fn output_matching(&self) -> OutputMatching {
        self.output_matching
    }

    /// Checks whether a unit file named `name` exists.
    pub fn exists(&self, name: &str) -> Result<bool, UnitError> {
        self.locator.exists(name)
    }

    /// Resolves `name` into a handle, failing with
    /// [`UnitError::UnitNotFound`] if no unit file carries that name.
    pub fn unit(&self, name: &str) -> Result<Service<'_, R>, UnitError> {
        self.ensure_exists(name)?;
        Ok(Service::new(name.to_string(), self))
    }

    /// Runs `is-active` for `name` without checking that the unit exists.
    pub fn is_active(&self, name: &str) -> Result<bool, UnitError> {
        self.query_bool(
            Subcommand::IsActive,
            name,
            ACTIVE_RESPONSE,
            INACTIVE_RESPONSE,
        )
    }

    /// Runs `is-enabled` for `name` without checking that the unit exists.
    pub fn is_enabled(&self, name: &str) -> Result<bool, UnitError> {
        self.query_bool(
            Subcommand::IsEnabled,
            name,
            ENABLED_RESPONSE,
            DISABLED_RESPONSE,
        )
    }

    /// Reads the full runtime state of `name`.
    pub fn active_state(&self, name: &str) -> Result<ActiveState, UnitError> {
        self.query_state(Subcommand::IsActive, name)
    }

    /// Reads the full install state of `name`.
    pub fn enablement_state(&self, name: &str) -> Result<EnablementState, UnitError> {
        self.query_state(Subcommand::IsEnabled, name)
    }

    /// Enables `name` after confirming its unit file exists.
    pub fn enable_service(&self, name: &str) -> Result<(), UnitError> {
        self.mutate(Subcommand::Enable, name, ExistenceCheck::Required)
    }

    /// Disables `name` after confirming its unit file exists.
    pub fn disable_service(&self, name: &str) -> Result<(), UnitError> {
        self.mutate(Subcommand::Disable, name, ExistenceCheck::Required)
    }

    /// Starts `name` after confirming its unit file exists.
    pub fn start_service(&self, name: &str) -> Result<(), UnitError> {
        self.mutate(Subcommand::Start, name, ExistenceCheck::Required)
    }

    /// Stops `name` after confirming its unit file exists.
    pub fn stop_service(&self, name: &str) -> Result<(), UnitError> {
        self.mutate(Subcommand::Stop, name, ExistenceCheck::Required)
    }

    /// Restarts `name` after confirming its unit file exists.
    pub fn restart_service(&self, name: &str) -> Result<(), UnitError> {
        self.mutate(Subcommand::Restart, name, ExistenceCheck::Required)
    }

    /// Reloads the configuration of `name` after confirming its unit file
    /// exists.
    pub fn reload_service(&self, name: &str) -> Result<(), UnitError> {
        self.mutate(Subcommand::Reload, name, ExistenceCheck::Required)
    }

    /// Invokes a state-changing subcommand. Success is the command's exit
    /// status alone; its output is only kept for the error.
    pub(crate) fn mutate(
        &self,
        subcommand: Subcommand,
        name: &str,
        check: ExistenceCheck,
    ) -> Result<(), UnitError> {
        if check == ExistenceCheck::Required {
            self.ensure_exists(name)?;
        }

        self.invoke(subcommand, name)?;
        Ok(())
    }

    fn ensure_exists(&self, name: &str) -> Result<(), UnitError> {
        if self.locator.exists(name)? {
            Ok(())
        } else {
            debug!("Unit '{name}' not found in any unit directory");
            Err(UnitError::UnitNotFound(name.to_string()))
        }
    }

    fn query_bool(
        &self,
        subcommand: Subcommand,
        name: &str,
        truthy: &str,
        falsy: &str,
    ) -> Result<bool, UnitError> {
        let output = self.invoke(subcommand, name)?;
        let matching = self.output_matching;
        let text = matching.normalize(&output.combined);

        if text == matching.normalize(truthy) {
            Ok(true)
        } else if text == matching.normalize(falsy) {
            Ok(false)
        } else {
            Err(UnitError::UnexpectedOutput {
                subcommand,
                unit: name.to_string(),
                output: output.combined,
            })
        }
    }

    // The service manager reports most states through a non-zero exit code,
    // so the output is parsed before the exit status is considered.
    fn query_state<S: FromStr>(
        &self,
        subcommand: Subcommand,
        name: &str,
    ) -> Result<S, UnitError> {
        let output = self.spawn(subcommand, name)?;
        let parsed = output.combined.trim().parse::<S>();
        match parsed {
            Ok(state) => Ok(state),
            Err(_) if !output.success => Err(exit_failure(subcommand, name, output)),
            Err(_) => Err(UnitError::UnexpectedOutput {
                subcommand,
                unit: name.to_string(),
                output: output.combined,
            }),
        }
    }

    /// Runs the command and requires it to exit successfully.
    fn invoke(&self, subcommand: Subcommand, name: &str) -> Result<CommandOutput, UnitError> {
        let output = self.spawn(subcommand, name)?;
        if output.success {
            Ok(output)
        } else {
            Err(exit_failure(subcommand, name, output))
        }
    }

    fn spawn(&self, subcommand: Subcommand, name: &str) -> Result<CommandOutput, UnitError> {
        self.runner
            .run(subcommand, name)
            .map_err(|err| UnitError::CommandExecution {
                subcommand,
                unit: name.to_string(),
                output: String::new(),
                source: ExecFailure::Spawn(err),
            })
    }
}

fn exit_failure(subcommand: Subcommand, name: &str, output: CommandOutput) -> UnitError {
    UnitError::CommandExecution {
        subcommand,
        unit: name.to_string(),
        output: output.combined,
        source: ExecFailure::Exit(output.exit_code),
    }
}

/// Runs `is-active` for `name` with the default client.
pub fn is_active(name: &str) -> Result<bool, UnitError> {
    Systemctl::default().is_active(name)
}

/// Runs `is-enabled` for `name` with the default client.
pub fn is_enabled(name: &str) -> Result<bool, UnitError> {
    Systemctl::default().is_enabled(name)
}

/// Enables `name` after confirming its unit file exists.
pub fn enable_service(name: &str) -> Result<(), UnitError> {
    Systemctl::default().enable_service(name)
}

/// Disables `name` after confirming its unit file exists.
pub fn disable_service(name: &str) -> Result<(), UnitError> {
    Systemctl::default().disable_service(name)
}

/// Starts `name` after confirming its unit file exists.
pub fn start_service(name: &str) -> Result<(), UnitError> {
    Systemctl::default().start_service(name)
}

/// Stops `name` after confirming its unit file exists.
pub fn stop_service(name: &str) -> Result<(), UnitError> {
    Systemctl::default().stop_service(name)
}

/// Restarts `name` after confirming its unit file exists.
pub fn restart_service(name: &str) -> Result<(), UnitError> {
    Systemctl::default().restart_service(name)
}

/// Reloads `name` after confirming its unit file exists.
pub fn reload_service(name: &str) -> Result<(), UnitError> {
    Systemctl::default().reload_service(name)
}
