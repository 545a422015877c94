//! Package-set reconciliation engine
//!
//! This module provides:
//! - `foreign_packages`: the set of installed packages no configured sync
//!   repository knows about (the equivalent of `pacman -Qm`)
//! - `check_upgrades`: classification of each foreign package against an
//!   upstream inventory as up-to-date, upgradable, or not found
//!
//! Both operations are pure: no I/O, no shared state, no errors of their
//! own. Malformed version strings are absorbed by the comparator's fallback
//! rules, so every input produces a report.

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::{ClassificationReport, Inventory, PackageReport};
use crate::version::vercmp;

/// Subset of `installed` whose name appears in none of the sync-repository
/// inventories. Only names matter on the sync side; their versions are
/// irrelevant to foreignness.
pub fn foreign_packages(installed: &Inventory, sync_repos: &[Inventory]) -> Inventory {
    let foreign: Inventory = installed
        .iter()
        .filter(|(name, _)| !sync_repos.iter().any(|repo| repo.contains(name)))
        .collect();
    debug!(
        installed = installed.len(),
        foreign = foreign.len(),
        "computed foreign package set"
    );
    foreign
}

/// Classify every foreign package against the upstream inventory.
///
/// A package missing upstream is reported as not found. Otherwise the
/// installed version is compared against the upstream one: strictly older
/// means upgradable, while equal or locally newer both count as up to date.
pub fn check_upgrades(foreign: &Inventory, upstream: &Inventory) -> ClassificationReport {
    let entries = foreign
        .iter()
        .map(|(name, installed)| match upstream.version_of(name) {
            None => PackageReport::not_found(name, installed),
            Some(latest) => match vercmp(installed, latest) {
                Ordering::Less => PackageReport::upgradable(name, installed, latest),
                Ordering::Equal | Ordering::Greater => {
                    PackageReport::up_to_date(name, installed, latest)
                }
            },
        })
        .collect();
    let report = ClassificationReport::new(entries);
    debug!(
        packages = report.len(),
        upgradable = report.upgradable().count(),
        not_found = report.not_found_count(),
        "classified foreign packages"
    );
    report
}
