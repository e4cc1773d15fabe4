use crate::backend::error::BackendError;
use crate::controller::DashboardError;
use crate::logging::LogLevel;

/// Maps failures to the severity they are shown with.
#[derive(Debug, Clone, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_backend_error(&self, error: &BackendError) -> LogLevel {
        match error {
            // Critical: bad keys and rejected requests need operator action
            BackendError::Http { status, .. } if (400..=499).contains(status) => LogLevel::Error,

            // Temporary service issues
            BackendError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Response shape no longer matches the tables
            BackendError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }

    pub fn classify(&self, error: &DashboardError) -> LogLevel {
        match error {
            DashboardError::Backend(e) => self.classify_backend_error(e),
            DashboardError::Validation(_) => LogLevel::Warn,
            DashboardError::Io(_) => LogLevel::Error,
        }
    }
}
