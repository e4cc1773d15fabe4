//! Severity levels and the `RUST_LOG` threshold for notifications.

use std::env;

/// Crate name as it appears in `RUST_LOG` directives.
const CRATE_TARGET: &str = "campaign_admin";

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

impl LogLevel {
    fn parse(word: &str) -> Option<Self> {
        match word.trim().to_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

/// Display threshold taken from `RUST_LOG`, defaulting to info.
pub fn threshold_from_env() -> LogLevel {
    env::var("RUST_LOG")
        .map(|filter| parse_threshold(&filter))
        .unwrap_or(LogLevel::Info)
}

/// Picks the level for this crate out of a `RUST_LOG` value.
///
/// A `campaign_admin=<level>` directive wins over a bare global level.
/// Anything unparsable yields info.
pub fn parse_threshold(filter: &str) -> LogLevel {
    let mut global = None;
    for directive in filter.split(',') {
        match directive.split_once('=') {
            Some((target, level)) if target.trim() == CRATE_TARGET => {
                if let Some(level) = LogLevel::parse(level) {
                    return level;
                }
            }
            Some(_) => {}
            None => global = global.or_else(|| LogLevel::parse(directive)),
        }
    }
    global.unwrap_or(LogLevel::Info)
}

pub fn should_log(event_level: LogLevel, threshold: LogLevel) -> bool {
    event_level >= threshold
}

pub fn should_log_with_env(event_level: LogLevel) -> bool {
    should_log(event_level, threshold_from_env())
}

/// Mirrors a notification to the `log` facade.
pub fn emit(level: LogLevel, msg: &str) {
    log::log!(target: CRATE_TARGET, level.into(), "{}", msg);
}
