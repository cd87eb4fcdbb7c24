//! Handle bound to a resolved unit.
use std::fmt;

use crate::{
    error::UnitError,
    runner::{CommandRunner, Subcommand, SystemctlRunner},
    state::{ActiveState, EnablementState},
    systemctl::{ExistenceCheck, Systemctl},
};

/// A unit that was found on disk when the handle was created.
///
/// The handle stores nothing but the name: every query asks the service
/// manager again, and every mutation is a single control-command run with
/// no follow-up verification. Obtain one through [`Systemctl::unit`].
pub struct Service<'a, R = SystemctlRunner> {
    name: String,
    ctl: &'a Systemctl<R>,
}

impl<'a, R: CommandRunner> Service<'a, R> {
    pub(crate) fn new(name: String, ctl: &'a Systemctl<R>) -> Self {
        Self { name, ctl }
    }

    /// Unit name, e.g. `nginx.service`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` for `active`, `false` for `inactive`; any other answer is an
    /// error. systemctl exits non-zero for a stopped unit, so a real
    /// `inactive` surfaces as [`UnitError::CommandExecution`]; use
    /// [`Service::active_state`] to read it instead.
    pub fn is_active(&self) -> Result<bool, UnitError> {
        self.ctl.is_active(&self.name)
    }

    /// `true` for `enabled`, `false` for `disabled`; any other answer is an
    /// error.
    pub fn is_enabled(&self) -> Result<bool, UnitError> {
        self.ctl.is_enabled(&self.name)
    }

    /// Full runtime state, read regardless of the command's exit code.
    pub fn active_state(&self) -> Result<ActiveState, UnitError> {
        self.ctl.active_state(&self.name)
    }

    /// Full install state, read regardless of the command's exit code.
    pub fn enablement_state(&self) -> Result<EnablementState, UnitError> {
        self.ctl.enablement_state(&self.name)
    }

    pub fn enable(&self) -> Result<(), UnitError> {
        self.mutate(Subcommand::Enable)
    }

    pub fn disable(&self) -> Result<(), UnitError> {
        self.mutate(Subcommand::Disable)
    }

    pub fn start(&self) -> Result<(), UnitError> {
        self.mutate(Subcommand::Start)
    }

    pub fn stop(&self) -> Result<(), UnitError> {
        self.mutate(Subcommand::Stop)
    }

    pub fn restart(&self) -> Result<(), UnitError> {
        self.mutate(Subcommand::Restart)
    }

    pub fn reload(&self) -> Result<(), UnitError> {
        self.mutate(Subcommand::Reload)
    }

    fn mutate(&self, subcommand: Subcommand) -> Result<(), UnitError> {
        self.ctl.mutate(subcommand, &self.name, ExistenceCheck::Skip)
    }
}

impl<R> Clone for Service<'_, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            ctl: self.ctl,
        }
    }
}

impl<R> fmt::Debug for Service<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service").field("name", &self.name).finish()
    }
}

impl<R> fmt::Display for Service<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
