//! Version comparison against a remote version file

#[cfg(test)]
use mockall::automock;

use tracing::debug;

use crate::parser::ini::IniParser;
use crate::version::normalize::concatenated_digits;
use crate::version::outcome::Outcome;
use crate::version::remote::VersionFileClient;
use crate::version::tier::ReleaseTier;

/// Capability for emitting diagnostic messages from a checker
///
/// Injected at construction so diagnostics stay scoped to one checker
/// instance instead of living in process-wide logger state.
#[cfg_attr(test, automock)]
pub trait Diagnostics: Send + Sync {
    /// Report one diagnostic message
    fn report(&self, message: &str);
}

/// Diagnostics implementation that forwards to the tracing subscriber
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, message: &str) {
        debug!("{message}");
    }
}

/// Checks a locally known version value against a remote version file.
///
/// The meaning of `current_version` depends on the comparison method
/// called: a `dd-mm-yyyy` date, a dotted version number, or a release
/// tier literal. Immutable after construction; every comparison call
/// performs its own fetch.
pub struct VersionChecker {
    current_version: String,
    version_file_url: String,
    section: String,
    key: String,
    debug: bool,
    client: VersionFileClient,
    parser: IniParser,
    diagnostics: Box<dyn Diagnostics>,
}

impl VersionChecker {
    pub fn new(current_version: &str, version_file_url: &str, section: &str, key: &str) -> Self {
        Self {
            current_version: current_version.to_string(),
            version_file_url: version_file_url.to_string(),
            section: section.to_string(),
            key: key.to_string(),
            debug: false,
            client: VersionFileClient::new(),
            parser: IniParser::new(),
            diagnostics: Box::new(TracingDiagnostics),
        }
    }

    /// Enable or disable verbose diagnostics
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Replace the diagnostics sink
    pub fn with_diagnostics(mut self, diagnostics: Box<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    fn report(&self, message: &str) {
        if self.debug {
            self.diagnostics.report(message);
        }
    }

    /// Fetch the version file and extract the configured section/key value
    async fn lookup_remote_value(&self) -> Result<String, Outcome> {
        let content = match self.client.fetch(&self.version_file_url).await {
            Ok(content) => content,
            Err(e) => {
                self.report(&format!("fetch failed: {e}"));
                return Err(Outcome::FetchFailed);
            }
        };

        let document = match self.parser.parse(&content) {
            Ok(document) => document,
            Err(e) => {
                self.report(&format!("version file is not valid INI: {e}"));
                return Err(Outcome::MissingEntry);
            }
        };

        match document.get(&self.section, &self.key) {
            Some(value) => Ok(value.to_string()),
            None => {
                self.report(&format!(
                    "version file has no entry for [{}] {}",
                    self.section, self.key
                ));
                Err(Outcome::MissingEntry)
            }
        }
    }

    fn freshness(local: i64, remote: i64) -> Outcome {
        if remote > local {
            Outcome::Outdated
        } else {
            Outcome::UpToDate
        }
    }

    /// Compare release dates in `dd-mm-yyyy` form.
    ///
    /// Both values are normalized by stripping `-` and parsing the digits
    /// as one base-10 integer, so ordering is by concatenated digits, not
    /// by calendar.
    ///
    /// When debug is enabled and a value fails to normalize, the method
    /// reports and returns `None` instead of `Some(Outcome::InvalidDate)`;
    /// debug-mode callers must treat an absent result as a failed
    /// conversion.
    pub async fn compare_by_date(&self) -> Option<Outcome> {
        let remote = match self.lookup_remote_value().await {
            Ok(value) => value,
            Err(outcome) => return Some(outcome),
        };

        let local = concatenated_digits(&self.current_version, '-');
        let remote = concatenated_digits(&remote, '-');
        let (Some(local), Some(remote)) = (local, remote) else {
            if self.debug {
                self.diagnostics
                    .report("invalid date format, correct format is 'dd-mm-yyyy'");
                return None;
            }
            return Some(Outcome::InvalidDate);
        };

        Some(Self::freshness(local, remote))
    }

    /// Compare dotted version numbers.
    ///
    /// Both values are normalized by stripping `.` and parsing the digits
    /// as one base-10 integer ("1.2.10" becomes 1210). Segments of
    /// unequal width therefore order by digit count, not by field; no
    /// semantic version comparison is performed.
    ///
    /// Shares the debug-mode behavior of [`Self::compare_by_date`]: an
    /// unconvertible value reports and returns `None` when debug is
    /// enabled.
    pub async fn compare_by_version(&self) -> Option<Outcome> {
        let remote = match self.lookup_remote_value().await {
            Ok(value) => value,
            Err(outcome) => return Some(outcome),
        };

        let local = concatenated_digits(&self.current_version, '.');
        let remote = concatenated_digits(&remote, '.');
        let (Some(local), Some(remote)) = (local, remote) else {
            if self.debug {
                self.diagnostics.report("invalid version format provided");
                return None;
            }
            return Some(Outcome::InvalidVersion);
        };

        Some(Self::freshness(local, remote))
    }

    /// Compare named release tiers through the fixed ordinal table
    /// (alpha: 1, preview: 2, beta: 3, release: 4).
    pub async fn compare_by_release_tier(&self) -> Outcome {
        let remote = match self.lookup_remote_value().await {
            Ok(value) => value,
            Err(outcome) => return outcome,
        };

        let local = match self.current_version.parse::<ReleaseTier>() {
            Ok(tier) => tier,
            Err(e) => {
                self.report(&format!("local value: {e}"));
                return Outcome::InvalidLocalTier;
            }
        };

        let remote = match remote.parse::<ReleaseTier>() {
            Ok(tier) => tier,
            Err(e) => {
                self.report(&format!("remote value: {e}"));
                return Outcome::InvalidRemoteTier;
            }
        };

        if remote.ordinal() > local.ordinal() {
            Outcome::Outdated
        } else {
            Outcome::UpToDate
        }
    }
}
