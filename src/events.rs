//! Notification System
//!
//! Timestamped, levelled messages recorded by the controller for the operator.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Area of the dashboard a notification concerns.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Topic {
    /// Loading the campaign, donation and gallery snapshot.
    Data,
    Campaign,
    Gallery,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub topic: Topic,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(topic: Topic, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            topic,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(topic: Topic, msg: impl Into<String>) -> Self {
        Self::new(topic, msg.into(), EventType::Success, LogLevel::Info)
    }

    pub fn failure(topic: Topic, msg: impl Into<String>, log_level: LogLevel) -> Self {
        Self::new(topic, msg.into(), EventType::Error, log_level)
    }

    pub fn refresh(msg: impl Into<String>) -> Self {
        Self::new(Topic::Data, msg.into(), EventType::Refresh, LogLevel::Debug)
    }

    pub fn should_display(&self) -> bool {
        // Outcomes of operator actions are always shown
        if matches!(self.event_type, EventType::Success | EventType::Error) {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
