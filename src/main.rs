use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use vercheck::config::{CheckConfig, CompareMode};
use vercheck::version::checker::VersionChecker;
use vercheck::version::outcome::Outcome;

#[derive(Parser)]
#[command(name = "vercheck")]
#[command(version, about = "Check a locally known version against a remote version file")]
struct Cli {
    /// Locally known value: a dd-mm-yyyy date, a dotted version, or a release type
    #[arg(value_name = "CURRENT", required_unless_present = "config")]
    current_version: Option<String>,

    /// URL of the remote INI version file
    #[arg(long, required_unless_present = "config")]
    url: Option<String>,

    /// Section of the version file to read
    #[arg(long, required_unless_present = "config")]
    section: Option<String>,

    /// Key within the section holding the remote value
    #[arg(long, required_unless_present = "config")]
    key: Option<String>,

    /// How the two values are compared
    #[arg(long, value_enum, default_value_t = CompareMode::Version)]
    mode: CompareMode,

    /// Read the whole check definition from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["current_version", "url", "section", "key", "mode"])]
    config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Emit verbose diagnostics to stderr
    #[arg(long)]
    debug: bool,
}

/// Machine-readable report printed with `--json`
#[derive(Serialize)]
struct Report {
    code: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<Outcome>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let check = match &cli.config {
        Some(path) => CheckConfig::load(path)?,
        // required_unless_present guarantees the flags are set here
        None => CheckConfig {
            current_version: cli.current_version.clone().unwrap_or_default(),
            version_file_url: cli.url.clone().unwrap_or_default(),
            section: cli.section.clone().unwrap_or_default(),
            key: cli.key.clone().unwrap_or_default(),
            mode: cli.mode,
            debug: cli.debug,
        },
    };
    let debug = check.debug || cli.debug;

    init_tracing(debug);

    let outcome = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run_check(&check, debug));

    let code = match (outcome, check.mode) {
        (Some(outcome), _) => outcome.code(),
        // an absent debug-mode result means the conversion failed
        (None, CompareMode::Date) => Outcome::InvalidDate.code(),
        (None, _) => Outcome::InvalidVersion.code(),
    };

    if cli.json {
        println!(
            "{}",
            serde_json::to_string(&Report {
                code,
                status: outcome,
            })?
        );
    } else {
        match outcome {
            Some(outcome) => println!("{outcome}"),
            None => println!("no result, conversion failed"),
        }
    }

    Ok(ExitCode::from(code))
}

async fn run_check(check: &CheckConfig, debug: bool) -> Option<Outcome> {
    let checker = VersionChecker::new(
        &check.current_version,
        &check.version_file_url,
        &check.section,
        &check.key,
    )
    .with_debug(debug);

    match check.mode {
        CompareMode::Date => checker.compare_by_date().await,
        CompareMode::Version => checker.compare_by_version().await,
        CompareMode::ReleaseTier => Some(checker.compare_by_release_tier().await),
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
