//! Release tier ordering

use std::str::FromStr;

use thiserror::Error;

/// Named release maturity tier
///
/// Ordered from least to most mature: alpha < preview < beta < release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReleaseTier {
    Alpha,
    Preview,
    Beta,
    Release,
}

impl ReleaseTier {
    /// Position of this tier in the fixed ordinal table
    pub fn ordinal(self) -> u8 {
        match self {
            ReleaseTier::Alpha => 1,
            ReleaseTier::Preview => 2,
            ReleaseTier::Beta => 3,
            ReleaseTier::Release => 4,
        }
    }

    /// Returns the string representation of the tier
    pub fn as_str(self) -> &'static str {
        match self {
            ReleaseTier::Alpha => "alpha",
            ReleaseTier::Preview => "preview",
            ReleaseTier::Beta => "beta",
            ReleaseTier::Release => "release",
        }
    }
}

/// Error for a release type literal outside the fixed table
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown release type: {0}")]
pub struct UnknownTier(pub String);

impl FromStr for ReleaseTier {
    type Err = UnknownTier;

    // Only the exact lowercase literals are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alpha" => Ok(ReleaseTier::Alpha),
            "preview" => Ok(ReleaseTier::Preview),
            "beta" => Ok(ReleaseTier::Beta),
            "release" => Ok(ReleaseTier::Release),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}
