//! Unit states as reported by `is-active` and `is-enabled`.
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Runtime state printed by `systemctl is-active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ActiveState {
    Active,
    Reloading,
    Inactive,
    Failed,
    Activating,
    Deactivating,
    Maintenance,
    Refreshing,
}

impl ActiveState {
    /// Returns `true` while the unit's processes are up, including during a
    /// reload or refresh.
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Active | Self::Reloading | Self::Refreshing)
    }

    /// Returns `true` for states that are on the way to another state.
    pub const fn is_transitional(&self) -> bool {
        matches!(
            self,
            Self::Reloading
                | Self::Activating
                | Self::Deactivating
                | Self::Maintenance
                | Self::Refreshing
        )
    }
}

/// Install state printed by `systemctl is-enabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum EnablementState {
    Enabled,
    EnabledRuntime,
    Linked,
    LinkedRuntime,
    Alias,
    Masked,
    MaskedRuntime,
    Static,
    Indirect,
    Disabled,
    Generated,
    Transient,
    Bad,
    NotFound,
}

impl EnablementState {
    /// Returns `true` if the unit is hooked into its install targets,
    /// persistently or for this boot only.
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled | Self::EnabledRuntime)
    }

    /// Returns `true` if the unit is linked to `/dev/null` and cannot start.
    pub const fn is_masked(&self) -> bool {
        matches!(self, Self::Masked | Self::MaskedRuntime)
    }
}
