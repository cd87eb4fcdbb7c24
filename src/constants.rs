//! Constants and default configuration values for unitctl.
//!
//! Centralizes the well-known paths and literal responses used when talking to
//! the service manager.

// ============================================================================
// Control Command
// ============================================================================

/// Absolute path of the service-control command used when none is configured.
pub const DEFAULT_SYSTEMCTL_PATH: &str = "/usr/bin/systemctl";

// ============================================================================
// Unit Search Paths
// ============================================================================

/// Directories scanned for unit definition files, in scan order.
///
/// Covers vendor, administrator, runtime, transient, generator and control
/// override locations for both system and user managers.
pub const UNIT_PATHS: [&str; 15] = [
    "/usr/lib/systemd/system/",
    "/etc/systemd/system/",
    "/usr/local/lib/systemd/system/",
    "/etc/systemd/user/",
    "/etc/systemd/system.control/",
    "/run/systemd/system.control/",
    "/run/systemd/transient/",
    "/run/systemd/generator.early/",
    "/etc/systemd/systemd.attached/",
    "/run/systemd/system/",
    "/run/systemd/systemd.attached/",
    "/run/systemd/generator/",
    "/lib/systemd/system/",
    "/run/systemd/generator.late/",
    "/usr/lib/systemd/user/",
];

// ============================================================================
// Query Responses
// ============================================================================

/// `is-active` output for a running unit.
pub const ACTIVE_RESPONSE: &str = "active\n";

/// `is-active` output for a stopped unit.
pub const INACTIVE_RESPONSE: &str = "inactive\n";

/// `is-enabled` output for an enabled unit.
pub const ENABLED_RESPONSE: &str = "enabled\n";

/// `is-enabled` output for a disabled unit.
pub const DISABLED_RESPONSE: &str = "disabled\n";
