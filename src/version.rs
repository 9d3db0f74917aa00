//! Release types and semantic version increments

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use semver::Version;

use crate::error::{MsyncError, Result};

/// The kind of release a bump produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
}

impl ReleaseType {
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = MsyncError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(ReleaseType::Major),
            "minor" => Ok(ReleaseType::Minor),
            "patch" => Ok(ReleaseType::Patch),
            other => Err(MsyncError::InvalidVersion {
                value: other.to_string(),
                reason: "expected one of: major, minor, patch".to_string(),
            }),
        }
    }
}

/// Parse a semantic version string with a contextual error
pub fn parse(value: &str) -> Result<Version> {
    Version::parse(value).map_err(|e| MsyncError::InvalidVersion {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Increment a version per standard semver rules.
///
/// `major` resets minor and patch, `minor` resets patch, `patch` bumps
/// patch only. Pre-release and build metadata are dropped.
pub fn increment(version: &Version, release: ReleaseType) -> Version {
    match release {
        ReleaseType::Major => Version::new(version.major + 1, 0, 0),
        ReleaseType::Minor => Version::new(version.major, version.minor + 1, 0),
        ReleaseType::Patch => Version::new(version.major, version.minor, version.patch + 1),
    }
}
