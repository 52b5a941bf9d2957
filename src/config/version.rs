//! DNSimple API version definitions.
//!
//! This module provides the [`ApiVersion`] enum and the versioning wrapper
//! that prefixes every resource path with the version segment before dispatch.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// DNSimple API version.
///
/// DNSimple exposes a single stable major version (`v2`). The `Custom`
/// variant covers future majors so the client can be pointed at them without
/// a library release.
///
/// # Example
///
/// ```rust
/// use dnsimple::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.prefix(), "/v2");
/// assert_eq!(version.versioned("/1010/domains"), "/v2/1010/domains");
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2.
    #[default]
    V2,
    /// Custom version string (normalized to `vN`) for majors this crate does not know.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns `true` if this is a known stable API version.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        matches!(self, Self::V2)
    }

    /// Returns the path prefix for this version (e.g. `/v2`).
    #[must_use]
    pub fn prefix(&self) -> String {
        format!("/{self}")
    }

    /// Prepends the version segment to `path`, unconditionally.
    ///
    /// Use this for paths built from identifiers: an account named `v2`
    /// yields `/v2/v2/domains`, not `/v2/domains`.
    #[must_use]
    pub fn prefixed(&self, path: &str) -> String {
        let prefix = self.prefix();
        if path.starts_with('/') {
            format!("{prefix}{path}")
        } else {
            format!("{prefix}/{path}")
        }
    }

    /// Prepends the version segment to `path` unless it is already present.
    ///
    /// Meant for raw paths that may already carry the prefix. Paths built
    /// from identifiers should go through [`prefixed`](Self::prefixed).
    ///
    /// Pure and total: the result is always a rooted path, and applying it
    /// twice yields the same value as applying it once.
    #[must_use]
    pub fn versioned(&self, path: &str) -> String {
        let prefix = self.prefix();
        let already_versioned = path
            .strip_prefix(prefix.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?']));

        if already_versioned {
            path.to_string()
        } else {
            self.prefixed(path)
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        s.strip_prefix('v').is_some_and(|digits| {
            !digits.is_empty()
                && !digits.starts_with('0')
                && digits.chars().all(|c| c.is_ascii_digit())
        })
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => f.write_str("v2"),
            Self::Custom(s) => f.write_str(s),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('/').to_lowercase();
        let normalized = if s.starts_with('v') {
            s.clone()
        } else {
            format!("v{s}")
        };

        match normalized.as_str() {
            "v2" => Ok(Self::V2),
            _ if Self::is_valid_version_format(&normalized) => Ok(Self::Custom(normalized)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
