//! Configuration management for unitctl.
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use strum_macros::{AsRefStr, EnumString};

use crate::{
    constants::{DEFAULT_SYSTEMCTL_PATH, UNIT_PATHS},
    error::UnitError,
};

/// How query output is compared against the expected literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutputMatching {
    /// Compare byte for byte, trailing newline included.
    #[default]
    Exact,
    /// Trim trailing whitespace before comparing. Compatibility flag for
    /// wrappers that append extra blank lines or carriage returns.
    TrimTrailingWhitespace,
}

impl OutputMatching {
    /// Applies the policy to raw command output.
    pub fn normalize<'a>(&self, output: &'a str) -> &'a str {
        match self {
            OutputMatching::Exact => output,
            OutputMatching::TrimTrailingWhitespace => output.trim_end(),
        }
    }
}

/// Represents the structure of the configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Absolute path of the service-control command.
    pub systemctl_path: PathBuf,
    /// Arguments placed before the subcommand (e.g. `--user`).
    pub systemctl_args: Vec<String>,
    /// Directories scanned for unit files, in order.
    pub unit_paths: Vec<PathBuf>,
    /// Query output comparison policy.
    pub output_matching: OutputMatching,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            systemctl_path: PathBuf::from(DEFAULT_SYSTEMCTL_PATH),
            systemctl_args: Vec::new(),
            unit_paths: UNIT_PATHS.into_iter().map(PathBuf::from).collect(),
            output_matching: OutputMatching::Exact,
        }
    }
}

/// Loads and parses a YAML configuration file. Missing keys take their
/// defaults.
pub fn load_config(config_path: &Path) -> Result<Config, UnitError> {
    let content = fs::read_to_string(config_path).map_err(|e| {
        UnitError::ConfigRead(std::io::Error::new(
            e.kind(),
            format!("{} ({})", e, config_path.display()),
        ))
    })?;

    // An empty document deserializes to unit, not a map.
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
