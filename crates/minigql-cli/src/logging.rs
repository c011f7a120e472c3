//! Logger setup for the `minigql` binary.
//!
//! Library crates only log through the `log` facade; this installs the
//! `tracing` subscriber that renders those records on stderr.

use crate::Cli;
use tracing::Level;

pub(crate) const DEFAULT_LOG_LEVEL: Level = Level::INFO;
pub(crate) const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Maps a `LOG_LEVEL` value to a level. Matching is case-insensitive and
/// ignores surrounding whitespace; `verbose` is an alias for `debug`.
pub(crate) fn parse_log_level(raw: &str) -> Option<Level> {
    let raw = raw.trim();
    [
        ("trace", Level::TRACE),
        ("debug", Level::DEBUG),
        ("verbose", Level::DEBUG),
        ("info", Level::INFO),
        ("warn", Level::WARN),
        ("error", Level::ERROR),
    ]
    .into_iter()
    .find_map(|(name, level)| raw.eq_ignore_ascii_case(name).then_some(level))
}

/// The level chosen by `--verbose` or `env_value`, plus a warning to log
/// once the subscriber is up if `env_value` was not recognized.
pub(crate) fn select_log_level(
    verbose: bool,
    env_value: Option<&str>,
) -> (Level, Option<String>) {
    if verbose {
        return (Level::DEBUG, None);
    }
    match env_value {
        None => (DEFAULT_LOG_LEVEL, None),
        Some(raw) => match parse_log_level(raw) {
            Some(level) => (level, None),
            None => (
                DEFAULT_LOG_LEVEL,
                Some(format!(
                    "Invalid `{LOG_LEVEL_ENV_VAR}` environment variable value: `{}`",
                    raw.trim(),
                )),
            ),
        },
    }
}

pub(crate) fn setup_logger(cli: &Cli) {
    let env_value = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    let (log_level, warning) = select_log_level(cli.verbose, env_value.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
