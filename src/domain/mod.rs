//! Core domain models for aurcheck
//!
//! This module contains the fundamental types used throughout the crate:
//! - Package inventories (name-to-version snapshots of one package universe)
//! - Classification reports produced by the reconciliation engine

mod inventory;
mod report;

pub use inventory::Inventory;
pub use report::{ClassificationReport, PackageReport, PackageStatus};
