//! Pacman-style version comparison
//!
//! This module provides:
//! - `vercmp`: a total order over `[epoch:]pkgver[-pkgrel]` version strings,
//!   matching the reference package manager's ordering
//! - `Version`: an ordered wrapper type for use in inventories and reports
//!
//! Comparison never fails: malformed input falls back to well-defined
//! defaults (absent or non-numeric epoch is 0, a dash that would leave an
//! empty pkgver yields no pkgrel) rather than an error.

mod segment;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use segment::segment_cmp;

/// A version string split into its three comparison units. Borrowed from the
/// input and only alive for the duration of one comparison.
struct Evr<'a> {
    /// Digit run before a `:`, or "0" when absent or malformed
    epoch: &'a str,
    /// Upstream version
    pkgver: &'a str,
    /// Package release, absent when no usable `-` split exists
    pkgrel: Option<&'a str>,
}

/// Split a raw version string into epoch, pkgver and pkgrel.
fn parse_evr(raw: &str) -> Evr<'_> {
    let bytes = raw.as_bytes();

    let mut digits = 0;
    while digits < bytes.len() && bytes[digits].is_ascii_digit() {
        digits += 1;
    }
    // An epoch is only recognized as a leading digit run directly followed
    // by ':'. Anything else (including text like "1a:2") leaves the colon in
    // the body, where it acts as a plain separator.
    let (epoch, body) = if digits < bytes.len() && bytes[digits] == b':' {
        let epoch = &raw[..digits];
        let epoch = if epoch.is_empty() { "0" } else { epoch };
        (epoch, &raw[digits + 1..])
    } else {
        ("0", raw)
    };

    // pkgrel is everything after the last '-', except when that split would
    // leave an empty pkgver; then the whole body is the pkgver.
    let (pkgver, pkgrel) = match body.rfind('-') {
        Some(pos) if pos > 0 => (&body[..pos], Some(&body[pos + 1..])),
        _ => (body, None),
    };

    Evr {
        epoch,
        pkgver,
        pkgrel,
    }
}

/// Compare two pacman-style version strings.
///
/// Epochs are compared first and decide alone when unequal. Equal epochs
/// fall through to the pkgver, then to the pkgrel. A version carrying an
/// explicit pkgrel out-ranks the bare pkgver it was built from:
/// `1.2-1 > 1.2`.
pub fn vercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let a = parse_evr(a);
    let b = parse_evr(b);

    let by_epoch = segment_cmp(a.epoch, b.epoch);
    if by_epoch != Ordering::Equal {
        return by_epoch;
    }

    let by_pkgver = segment_cmp(a.pkgver, b.pkgver);
    if by_pkgver != Ordering::Equal {
        return by_pkgver;
    }

    match (a.pkgrel, b.pkgrel) {
        (Some(a), Some(b)) => segment_cmp(a, b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// A package version string ordered by `vercmp`.
///
/// Equality follows the comparison, not the bytes: `Version::from("1.007")`
/// equals `Version::from("1.7")`. The original text is preserved for
/// display and serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Create a version from its textual form
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// The version text as originally supplied
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        vercmp(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        vercmp(&self.0, &other.0)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(version: &str) -> Self {
        Self::new(version)
    }
}

impl From<String> for Version {
    fn from(version: String) -> Self {
        Self(version)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
