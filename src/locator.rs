//! Unit file discovery.
use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{config::Config, constants::UNIT_PATHS, error::UnitError};

/// Decides whether a unit name refers to a unit file known to the service
/// manager by scanning an ordered list of directories.
///
/// Nothing is cached; each call reads the filesystem again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitLocator {
    search_paths: Vec<PathBuf>,
}

impl UnitLocator {
    /// Creates a locator scanning `search_paths` in the given order.
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a locator over the `unit_paths` of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.unit_paths.iter().cloned())
    }

    /// Directories scanned, in order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Returns `Ok(true)` if any search directory holds an entry named
    /// exactly `name`.
    ///
    /// Directories that do not exist are skipped. A directory that exists but
    /// cannot be listed aborts the scan with [`UnitError::Filesystem`].
    pub fn exists(&self, name: &str) -> Result<bool, UnitError> {
        for dir in &self.search_paths {
            if let Err(err) = fs::metadata(dir)
                && err.kind() == io::ErrorKind::NotFound
            {
                debug!("Skipping missing unit directory {}", dir.display());
                continue;
            }

            let found = Self::dir_contains(dir, name).map_err(|source| {
                warn!("Failed to list unit directory {}: {source}", dir.display());
                UnitError::Filesystem {
                    path: dir.clone(),
                    source,
                }
            })?;

            if found {
                debug!("Found unit '{name}' in {}", dir.display());
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn dir_contains(dir: &Path, name: &str) -> io::Result<bool> {
        let wanted = OsStr::new(name);
        for entry in fs::read_dir(dir)? {
            if entry?.file_name() == wanted {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Default for UnitLocator {
    fn default() -> Self {
        Self::new(UNIT_PATHS)
    }
}
