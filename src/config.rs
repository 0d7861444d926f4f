use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// User agent sent with version file requests
pub const USER_AGENT: &str = "vercheck";

/// How the local and remote values are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CompareMode {
    /// Compare `dd-mm-yyyy` release dates
    Date,
    /// Compare dotted version numbers
    #[default]
    Version,
    /// Compare named release tiers (alpha < preview < beta < release)
    ReleaseTier,
}

/// Declarative check definition, loadable from a JSON file
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckConfig {
    /// Locally known value; its meaning depends on `mode`
    pub current_version: String,
    /// URL of the remote INI version file
    pub version_file_url: String,
    /// Section of the version file to read
    pub section: String,
    /// Key within the section holding the remote value
    pub key: String,
    #[serde(default)]
    pub mode: CompareMode,
    #[serde(default)]
    pub debug: bool,
}

impl CheckConfig {
    /// Load a check definition from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read check config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse check config: {}", path.display()))?;
        Ok(config)
    }
}
