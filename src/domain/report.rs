//! Classification report types
//!
//! The reconciliation engine's output: one entry per foreign package with
//! its installed version, the upstream version when one is known, and an
//! up-to-date / upgradable / not-found status. Presentation (printing, exit
//! codes, formatting) is entirely the consumer's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a foreign package relative to the upstream repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageStatus {
    /// Installed version is equal to, or newer than, the upstream version.
    /// A locally newer version is not a failure condition.
    UpToDate,
    /// Upstream publishes a newer version
    Upgradable,
    /// The package is not known upstream
    NotFound,
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageStatus::UpToDate => write!(f, "up to date"),
            PackageStatus::Upgradable => write!(f, "upgradable"),
            PackageStatus::NotFound => write!(f, "not found"),
        }
    }
}

/// Classification of a single foreign package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReport {
    /// Package name
    pub name: String,
    /// Version currently installed
    pub installed: String,
    /// Latest version known upstream, absent when the package was not found
    pub upstream: Option<String>,
    /// Classification outcome
    pub status: PackageStatus,
}

impl PackageReport {
    /// Creates an up-to-date entry
    pub fn up_to_date(
        name: impl Into<String>,
        installed: impl Into<String>,
        upstream: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            installed: installed.into(),
            upstream: Some(upstream.into()),
            status: PackageStatus::UpToDate,
        }
    }

    /// Creates an upgradable entry
    pub fn upgradable(
        name: impl Into<String>,
        installed: impl Into<String>,
        upstream: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            installed: installed.into(),
            upstream: Some(upstream.into()),
            status: PackageStatus::Upgradable,
        }
    }

    /// Creates a not-found entry
    pub fn not_found(name: impl Into<String>, installed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            installed: installed.into(),
            upstream: None,
            status: PackageStatus::NotFound,
        }
    }

    /// Returns true if upstream publishes a newer version
    pub fn is_upgradable(&self) -> bool {
        self.status == PackageStatus::Upgradable
    }
}

/// The full result of one reconciliation pass, ordered by package name.
/// Immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationReport {
    packages: Vec<PackageReport>,
}

impl ClassificationReport {
    /// Build a report from per-package entries, normalizing to name order
    pub fn new(mut packages: Vec<PackageReport>) -> Self {
        packages.sort_by(|a, b| a.name.cmp(&b.name));
        Self { packages }
    }

    /// All entries in name order
    pub fn packages(&self) -> &[PackageReport] {
        &self.packages
    }

    /// Entries for which upstream publishes a newer version
    pub fn upgradable(&self) -> impl Iterator<Item = &PackageReport> {
        self.packages.iter().filter(|p| p.is_upgradable())
    }

    /// Number of packages not known upstream
    pub fn not_found_count(&self) -> usize {
        self.packages
            .iter()
            .filter(|p| p.status == PackageStatus::NotFound)
            .count()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the report holds no entries
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_entries_sorted_by_name() {
        let report = ClassificationReport::new(vec![
            PackageReport::not_found("zoxide-git", "0.9.4-1"),
            PackageReport::upgradable("aurutils", "20.2-1", "20.3-1"),
        ]);
        let names: Vec<&str> = report.packages().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["aurutils", "zoxide-git"]);
    }

    #[test]
    fn test_upgradable_filter() {
        let report = ClassificationReport::new(vec![
            PackageReport::up_to_date("paru", "2.0.4-1", "2.0.4-1"),
            PackageReport::upgradable("aurutils", "20.2-1", "20.3-1"),
            PackageReport::not_found("local-meta", "1-1"),
        ]);
        let upgradable: Vec<&str> =
            report.upgradable().map(|p| p.name.as_str()).collect();
        assert_eq!(upgradable, vec!["aurutils"]);
        assert_eq!(report.not_found_count(), 1);
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_not_found_has_no_upstream_version() {
        let entry = PackageReport::not_found("local-meta", "1-1");
        assert_eq!(entry.upstream, None);
        assert_eq!(entry.status, PackageStatus::NotFound);
        assert!(!entry.is_upgradable());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PackageStatus::UpToDate.to_string(), "up to date");
        assert_eq!(PackageStatus::Upgradable.to_string(), "upgradable");
        assert_eq!(PackageStatus::NotFound.to_string(), "not found");
    }

    #[test]
    fn test_report_serialization() {
        let report = ClassificationReport::new(vec![PackageReport::upgradable(
            "aurutils", "20.2-1", "20.3-1",
        )]);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"aurutils","installed":"20.2-1","upstream":"20.3-1","status":"upgradable"}]"#
        );
        let parsed: ClassificationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_empty_report() {
        let report = ClassificationReport::default();
        assert!(report.is_empty());
        assert_eq!(report.upgradable().count(), 0);
    }
}
