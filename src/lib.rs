//! unitctl is a thin facade over the systemd service manager. It checks that a
//! unit file exists in one of the well-known unit directories and then drives
//! `systemctl` to query or change the unit's state, turning the command's
//! output into typed results.
//!
//! ```no_run
//! use unitctl::Systemctl;
//!
//! # fn main() -> Result<(), unitctl::UnitError> {
//! let systemctl = Systemctl::default();
//! let nginx = systemctl.unit("nginx.service")?;
//!
//! // systemctl exits non-zero for a stopped unit, which `is_active` reports
//! // as an error; `active_state` reads the state whatever the exit code.
//! if !nginx.active_state()?.is_running() {
//!     nginx.start()?;
//! }
//!
//! // Or act on a bare name; existence is checked on each call.
//! unitctl::restart_service("nginx.service")?;
//! # Ok(())
//! # }
//! ```

/// Configuration management.
pub mod config;

/// Well-known paths and responses.
pub mod constants;

/// Error handling.
pub mod error;

/// Unit file discovery.
pub mod locator;

/// Control-command execution.
pub mod runner;

/// Handles for resolved units.
pub mod service;

/// Unit state enums.
pub mod state;

/// Client and name-based operations.
pub mod systemctl;

pub use config::{Config, OutputMatching, load_config};
pub use error::{ExecFailure, UnitError};
pub use locator::UnitLocator;
pub use runner::{CommandOutput, CommandRunner, Subcommand, SystemctlRunner};
pub use service::Service;
pub use state::{ActiveState, EnablementState};
pub use systemctl::{
    Systemctl, disable_service, enable_service, is_active, is_enabled, reload_service,
    restart_service, start_service, stop_service,
};
