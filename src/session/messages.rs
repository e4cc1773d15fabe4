//! Unified messaging system for session operations

use crate::environment::Environment;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_WARN: &str = "\x1b[1;33m"; // Bold Yellow
pub const COLOR_ERROR: &str = "\x1b[1;31m"; // Bold Red
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl SessionMessage {
    /// Create an info message
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Create a success message
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// Print the message with appropriate formatting
    pub fn print(&self) {
        match self {
            Self::Info(msg) => {
                println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg);
            }
            Self::Success(msg) => {
                println!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg);
            }
        }
    }
}

/// Print session startup message
pub fn print_session_starting(mode: &str, environment: &Environment) {
    SessionMessage::info(format!(
        "Starting {} mode against {:?}",
        mode, environment
    ))
    .print();
}

/// Print session exit message
pub fn print_session_exit_success() {
    SessionMessage::success("Campaign admin exited successfully").print();
}

/// Prints a controller notification to the console. Errors go to stderr.
pub fn print_notification(event: &Event) {
    if !event.should_display() {
        return;
    }
    let color = match (event.event_type, event.log_level) {
        (EventType::Success, _) => COLOR_SUCCESS,
        (EventType::Error, LogLevel::Warn) => COLOR_WARN,
        (EventType::Error, _) => COLOR_ERROR,
        (EventType::Refresh, _) => COLOR_DIM,
    };
    let line = format!(
        "{}[{}]{} {} {}",
        color,
        event.event_type.to_string().to_uppercase(),
        COLOR_RESET,
        event.timestamp,
        event.msg
    );
    if event.event_type == EventType::Error {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}
