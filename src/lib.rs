//! aurcheck - foreign package detection and AUR update checking
//!
//! This library identifies locally installed packages that no configured
//! sync repository provides ("foreign" packages, the set `pacman -Qm`
//! prints) and classifies each one against the AUR as up to date,
//! upgradable, or not found.
//!
//! The crate is organized around a small pure core and its collaborators:
//! - [`version`]: pacman-style version comparison, a self-contained
//!   reimplementation with no libalpm binding
//! - [`domain`]: inventories and classification reports
//! - [`reconcile`]: the set-difference and upgrade-classification engine
//! - [`source`]: contracts for local and sync-repository inventory
//!   providers
//! - [`registry`]: the AUR RPC client and the upstream-source contract
//!
//! The core performs no I/O and holds no state; every call works on
//! caller-supplied snapshots and is safe to issue concurrently.

pub mod domain;
pub mod error;
pub mod reconcile;
pub mod registry;
pub mod source;
pub mod version;

pub use domain::{ClassificationReport, Inventory, PackageReport, PackageStatus};
pub use error::{Error, RegistryError, SourceError};
pub use reconcile::{check_upgrades, foreign_packages};
pub use version::{vercmp, Version};
