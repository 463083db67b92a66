//! Logger setup.

use tracing_subscriber::EnvFilter;

use crate::time::JstTimer;

/// Crates whose events are enabled at `default_level` alongside the application itself
const WORKSPACE_TARGETS: [&str; 2] = ["trophy_core", "trophy_cli"];

/// Build the default filter directives for `app_name` at `default_level`.
///
/// `app_name` is normalised to a tracing target (`-` becomes `_`).
pub fn default_directives(app_name: &str, default_level: &str) -> String {
    std::iter::once(app_name.replace('-', "_"))
        .chain(WORKSPACE_TARGETS.iter().map(|t| t.to_string()))
        .map(|target| format!("{target}={default_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Events are written to stderr
/// so that stdout stays reserved for command output.
/// Calling this more than once is a no-op.
pub fn setup_logger(app_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(app_name, default_level)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(JstTimer)
        .with_ansi(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
