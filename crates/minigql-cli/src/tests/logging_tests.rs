use crate::logging::DEFAULT_LOG_LEVEL;
use crate::logging::parse_log_level;
use crate::logging::select_log_level;
use tracing::Level;

#[test]
fn level_names_are_case_insensitive() {
    assert_eq!(parse_log_level("debug"), Some(Level::DEBUG));
    assert_eq!(parse_log_level("DEBUG"), Some(Level::DEBUG));
    assert_eq!(parse_log_level(" Trace\n"), Some(Level::TRACE));
    assert_eq!(parse_log_level("verbose"), Some(Level::DEBUG));
    assert_eq!(parse_log_level("warn"), Some(Level::WARN));
    assert_eq!(parse_log_level("loud"), None);
    assert_eq!(parse_log_level(""), None);
}

#[test]
fn verbose_flag_wins_over_env() {
    assert_eq!(select_log_level(true, Some("error")), (Level::DEBUG, None));
    assert_eq!(select_log_level(true, Some("bogus")), (Level::DEBUG, None));
}

#[test]
fn env_value_or_default() {
    assert_eq!(select_log_level(false, None), (DEFAULT_LOG_LEVEL, None));
    assert_eq!(select_log_level(false, Some("trace")), (Level::TRACE, None));
}

/// An unrecognized value falls back to the default and yields a warning
/// naming the value.
#[test]
fn invalid_env_value_warns() {
    let (level, warning) = select_log_level(false, Some(" loud "));
    assert_eq!(level, DEFAULT_LOG_LEVEL);
    let warning = warning.expect("warning");
    assert!(warning.contains("LOG_LEVEL"), "{warning}");
    assert!(warning.contains("`loud`"), "{warning}");
}
