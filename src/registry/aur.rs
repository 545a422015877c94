//! AUR RPC v5 client
//!
//! This module provides:
//! - `AurClient`: exact-name package lookup (`/rpc/v5/info`) and keyword
//!   search (`/rpc/v5/search`)
//! - `AurPackage`: the typed package record the RPC returns
//! - `SearchBy`: which package fields a search term matches against
//!
//! Name matching is exact and case-sensitive; a package the AUR does not
//! know is simply absent from the result, not an error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::domain::Inventory;
use crate::error::RegistryError;
use crate::registry::{HttpClient, UpstreamSource};

/// Base URL of the AUR RPC
const AUR_RPC_URL: &str = "https://aur.archlinux.org/rpc/v5";

/// Registry name used in errors and reports
const AUR_NAME: &str = "AUR";

/// Envelope type the RPC uses to signal a request-level failure
const ERROR_TYPE: &str = "error";

/// The kind of AUR search to perform. It determines which fields of a
/// package a search term will match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBy {
    /// Match name or description
    #[default]
    NameDesc,
    /// Match package names only
    Name,
    /// Match package maintainers
    Maintainer,
    /// Match package dependencies
    Depends,
    /// Match dependencies required to build a package
    MakeDepends,
    /// Match optional dependencies of a package
    OptDepends,
    /// Match dependencies required to check a package
    CheckDepends,
}

impl SearchBy {
    /// Value of the `by` query parameter
    pub fn query_key(self) -> &'static str {
        match self {
            SearchBy::NameDesc => "name-desc",
            SearchBy::Name => "name",
            SearchBy::Maintainer => "maintainer",
            SearchBy::Depends => "depends",
            SearchBy::MakeDepends => "makedepends",
            SearchBy::OptDepends => "optdepends",
            SearchBy::CheckDepends => "checkdepends",
        }
    }
}

/// One package record as returned by the RPC. Search responses omit the
/// relation arrays; those default to empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AurPackage {
    #[serde(rename = "ID")]
    pub id: u64,
    pub name: String,
    #[serde(rename = "PackageBaseID")]
    pub package_base_id: u64,
    pub package_base: String,
    pub version: String,
    pub description: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(rename = "URLPath")]
    pub url_path: Option<String>,
    pub maintainer: Option<String>,
    pub submitter: Option<String>,
    pub num_votes: u64,
    pub popularity: f64,
    /// Unix timestamp of the out-of-date flag, absent when not flagged
    pub out_of_date: Option<i64>,
    /// Unix timestamp of first submission
    pub first_submitted: i64,
    /// Unix timestamp of the last modification
    pub last_modified: i64,
    #[serde(default)]
    pub license: Vec<String>,
    #[serde(default)]
    pub depends: Vec<String>,
    #[serde(default)]
    pub make_depends: Vec<String>,
    #[serde(default)]
    pub opt_depends: Vec<String>,
    #[serde(default)]
    pub check_depends: Vec<String>,
    #[serde(default)]
    pub provides: Vec<String>,
    #[serde(default)]
    pub conflicts: Vec<String>,
    #[serde(default)]
    pub replaces: Vec<String>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub co_maintainers: Vec<String>,
}

impl AurPackage {
    /// When the package was last modified
    pub fn last_modified_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.last_modified, 0)
    }

    /// When the package was first submitted
    pub fn first_submitted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.first_submitted, 0)
    }

    /// When the package was flagged out of date, if it is
    pub fn out_of_date_at(&self) -> Option<DateTime<Utc>> {
        self.out_of_date
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

/// Response envelope common to the info and search endpoints
#[derive(Debug, Deserialize)]
struct AurResponse {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    results: Vec<AurPackage>,
}

impl AurResponse {
    fn into_results(self) -> Result<Vec<AurPackage>, RegistryError> {
        if self.kind == ERROR_TYPE {
            let message = self.error.unwrap_or_else(|| "unknown error".to_string());
            return Err(RegistryError::rpc(AUR_NAME, message));
        }
        Ok(self.results)
    }
}

/// Client for the AUR RPC
pub struct AurClient {
    http: HttpClient,
    base_url: String,
}

impl AurClient {
    /// Create a client against the real AUR
    pub fn new() -> Result<Self, RegistryError> {
        Ok(Self::with_base_url(HttpClient::new()?, AUR_RPC_URL))
    }

    /// Create a client against an arbitrary RPC base URL (used in tests)
    pub fn with_base_url(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Look up packages by exact name. Names the AUR does not know are
    /// absent from the result.
    pub async fn info(&self, names: &[&str]) -> Result<Vec<AurPackage>, RegistryError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/info", self.base_url);
        let query: Vec<(&str, &str)> = names.iter().map(|name| ("arg[]", *name)).collect();
        let response: AurResponse = self.http.get_json(&url, &query, AUR_NAME).await?;
        let packages = response.into_results()?;
        debug!(requested = names.len(), found = packages.len(), "AUR info");
        Ok(packages)
    }

    /// Search for packages matching a keyword
    pub async fn search(
        &self,
        keyword: &str,
        by: SearchBy,
    ) -> Result<Vec<AurPackage>, RegistryError> {
        let url = format!("{}/search/{}", self.base_url, keyword);
        let query = [("by", by.query_key())];
        let response: AurResponse = self.http.get_json(&url, &query, AUR_NAME).await?;
        let packages = response.into_results()?;
        debug!(keyword, found = packages.len(), "AUR search");
        Ok(packages)
    }
}

#[async_trait]
impl UpstreamSource for AurClient {
    fn name(&self) -> &'static str {
        AUR_NAME
    }

    async fn latest_versions(&self, names: &[&str]) -> Result<Inventory, RegistryError> {
        let packages = self.info(names).await?;
        Ok(packages
            .into_iter()
            .map(|package| (package.name, package.version))
            .collect())
    }
}
