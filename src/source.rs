//! Inventory provider contracts
//!
//! The reconciliation engine consumes already-materialized snapshots; the
//! providers behind these traits own every filesystem and database concern.
//! This crate ships no on-disk implementation of the pacman database or its
//! configuration file; callers bring their own (or an in-memory one, as the
//! tests do) and hand the engine plain inventories.

use std::path::{Path, PathBuf};

use crate::domain::Inventory;
use crate::error::SourceError;

/// Default pacman installation root
const DEFAULT_ROOT: &str = "/";

/// Default location of the local and sync package databases
const DEFAULT_DB_PATH: &str = "/var/lib/pacman";

/// Default pacman configuration file
const DEFAULT_CONFIG_PATH: &str = "/etc/pacman.conf";

/// Locations of the package manager's root, databases, and configuration.
///
/// Providers receive these explicitly; nothing in the engine assumes a
/// fixed system layout. `Default` carries the stock pacman locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacmanPaths {
    /// Root path of the installation
    pub root: PathBuf,
    /// Directory holding the local and sync databases
    pub db_path: PathBuf,
    /// Path to the pacman configuration file
    pub config_path: PathBuf,
}

impl Default for PacmanPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl PacmanPaths {
    /// Stock pacman locations
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the installation root
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Override the database directory
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    /// Override the configuration file path
    pub fn with_config_path(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = config_path.into();
        self
    }

    /// Path of the sync database file for a repository name
    pub fn sync_db(&self, repository: &str) -> PathBuf {
        self.db_path.join("sync").join(format!("{}.db", repository))
    }

    /// The database directory as a path
    pub fn db_dir(&self) -> &Path {
        &self.db_path
    }
}

/// Provider of the locally-installed package inventory.
///
/// The mapping is expected to be deduplicated by name; a package store
/// guarantees that by construction.
pub trait InstalledSource {
    /// Snapshot of every installed package
    fn installed(&self) -> Result<Inventory, SourceError>;
}

/// Provider of sync-repository inventories.
///
/// The caller-supplied repository list is authoritative; no discovery
/// happens here.
pub trait SyncSource {
    /// Names of the configured repositories
    fn repositories(&self) -> Result<Vec<String>, SourceError>;

    /// Snapshot of one repository's packages
    fn packages(&self, repository: &str) -> Result<Inventory, SourceError>;
}

/// Union of every configured repository's inventory, with later
/// repositories shadowing earlier ones on a name collision.
pub fn sync_union(source: &dyn SyncSource) -> Result<Inventory, SourceError> {
    let mut union = Inventory::new();
    for repository in source.repositories()? {
        union.merge(source.packages(&repository)?);
    }
    Ok(union)
}
