use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    /// The version string is not three dot-separated non-negative integers.
    #[error("Malformed version '{0}': expected MAJOR.MINOR.PATCH")]
    Malformed(String),

    /// The persisted version record itself is damaged (not JSON, or no
    /// usable `version` string field).
    #[error("Invalid version record: {0}")]
    InvalidRecord(String),
}

/// A `MAJOR.MINOR.PATCH` version marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// The next patch release of this version.
    pub fn bump_patch(self) -> Version {
        Version {
            patch: self.patch + 1,
            ..self
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || VersionError::Malformed(s.to_string());

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(malformed());
        }

        let mut components = [0u64; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            // `u64::from_str` accepts a leading '+'; a version component is
            // digits only.
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            *slot = part.parse().map_err(|_| malformed())?;
        }

        Ok(Version {
            major: components[0],
            minor: components[1],
            patch: components[2],
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
