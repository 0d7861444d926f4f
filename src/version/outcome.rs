//! Outcome classification for version checks

use std::fmt;

use serde::Serialize;

/// Result of one comparison against the remote version file.
///
/// A closed set replacing raw integer codes; [`Outcome::code`] yields the
/// stable numeric code used as the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The local version is at least as new as the remote one (code 0)
    UpToDate,
    /// The remote version is newer (code 1)
    Outdated,
    /// The version file could not be fetched (code 2)
    FetchFailed,
    /// The version file could not be parsed or lacks the requested
    /// section or key (code 3)
    MissingEntry,
    /// A date value did not normalize to an integer (code 4)
    InvalidDate,
    /// A version value did not normalize to an integer (code 5)
    InvalidVersion,
    /// The local release type is not a known tier (code 6)
    InvalidLocalTier,
    /// The remote release type is not a known tier (code 7)
    InvalidRemoteTier,
}

impl Outcome {
    /// Stable numeric code of this outcome
    pub fn code(self) -> u8 {
        match self {
            Outcome::UpToDate => 0,
            Outcome::Outdated => 1,
            Outcome::FetchFailed => 2,
            Outcome::MissingEntry => 3,
            Outcome::InvalidDate => 4,
            Outcome::InvalidVersion => 5,
            Outcome::InvalidLocalTier => 6,
            Outcome::InvalidRemoteTier => 7,
        }
    }

    /// Whether this outcome reports a failure rather than a comparison
    pub fn is_failure(self) -> bool {
        self.code() >= 2
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Outcome::UpToDate => "current version is up to date",
            Outcome::Outdated => "a newer version is available",
            Outcome::FetchFailed => "invalid file URL provided or network error",
            Outcome::MissingEntry => {
                "version file does not contain the requested section or key"
            }
            Outcome::InvalidDate => {
                "invalid date format provided, correct format is 'dd-mm-yyyy'"
            }
            Outcome::InvalidVersion => "invalid version format provided",
            Outcome::InvalidLocalTier => "unknown local release type",
            Outcome::InvalidRemoteTier => "unknown remote release type",
        };
        f.write_str(message)
    }
}
