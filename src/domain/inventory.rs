//! Package inventory mapping
//!
//! An `Inventory` is a snapshot of one package universe (the local
//! installation, a sync repository, the AUR) as a name-to-version mapping.
//! It is built fresh for every reconciliation and never cached; staleness
//! is the caller's concern.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

/// A mapping from package name to version string.
///
/// Keys are unique; iteration is ordered by name so that repeated
/// reconciliations over the same data produce byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    packages: BTreeMap<String, String>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a package, replacing any previous version for the same name
    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.packages.insert(name.into(), version.into());
    }

    /// Look up the version recorded for a package
    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.packages.get(name).map(String::as_str)
    }

    /// Whether a package name is present
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Number of packages
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the inventory holds no packages
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate over `(name, version)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.packages
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }

    /// Iterate over package names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    /// Absorb another inventory. On a name collision the other side wins,
    /// mirroring how a later sync repository shadows an earlier one.
    pub fn merge(&mut self, other: Inventory) {
        self.packages.extend(other.packages);
    }
}

impl<N, V> FromIterator<(N, V)> for Inventory
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            packages: iter
                .into_iter()
                .map(|(name, version)| (name.into(), version.into()))
                .collect(),
        }
    }
}

impl<N, V> Extend<(N, V)> for Inventory
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        self.packages.extend(
            iter.into_iter()
                .map(|(name, version)| (name.into(), version.into())),
        );
    }
}

impl IntoIterator for Inventory {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut inventory = Inventory::new();
        inventory.insert("paru", "2.0.4-1");
        assert_eq!(inventory.version_of("paru"), Some("2.0.4-1"));
        assert_eq!(inventory.version_of("yay"), None);
        assert!(inventory.contains("paru"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_insert_replaces_existing_version() {
        let mut inventory = Inventory::new();
        inventory.insert("paru", "2.0.3-1");
        inventory.insert("paru", "2.0.4-1");
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.version_of("paru"), Some("2.0.4-1"));
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let inventory: Inventory =
            [("zfs-dkms", "2.2.6-1"), ("aurutils", "20.3-1"), ("paru", "2.0.4-1")]
                .into_iter()
                .collect();
        let names: Vec<&str> = inventory.names().collect();
        assert_eq!(names, vec!["aurutils", "paru", "zfs-dkms"]);
    }

    #[test]
    fn test_merge_later_side_wins() {
        let mut core: Inventory = [("linux", "6.10-1"), ("pacman", "7.0-1")].into_iter().collect();
        let extra: Inventory = [("linux", "6.11-1"), ("git", "2.46-1")].into_iter().collect();
        core.merge(extra);
        assert_eq!(core.len(), 3);
        assert_eq!(core.version_of("linux"), Some("6.11-1"));
        assert_eq!(core.version_of("git"), Some("2.46-1"));
    }

    #[test]
    fn test_empty_inventory() {
        let inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert_eq!(inventory.iter().count(), 0);
    }

    #[test]
    fn test_serde_is_a_plain_map() {
        let inventory: Inventory = [("paru", "2.0.4-1")].into_iter().collect();
        let json = serde_json::to_string(&inventory).unwrap();
        assert_eq!(json, r#"{"paru":"2.0.4-1"}"#);
        let parsed: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, inventory);
    }
}
