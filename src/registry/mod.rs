//! Upstream registry adapters
//!
//! This module provides:
//! - the `UpstreamSource` trait, the engine's contract for "latest known
//!   version of each package" queries
//! - an HTTP client foundation with retry logic
//! - the AUR RPC adapter

mod aur;
mod client;

pub use aur::{AurClient, AurPackage, SearchBy};
pub use client::HttpClient;

use async_trait::async_trait;

use crate::domain::Inventory;
use crate::error::RegistryError;

/// A registry that can report the latest published version of packages.
///
/// Lookups are by exact, case-sensitive name. Names the registry does not
/// know are left out of the returned inventory; only transport or protocol
/// failures produce an error.
#[async_trait]
pub trait UpstreamSource: Send + Sync {
    /// Human-readable registry name, used in errors and logs
    fn name(&self) -> &'static str;

    /// Latest known version for each of the given package names
    async fn latest_versions(&self, names: &[&str]) -> Result<Inventory, RegistryError>;
}
