//! Dashboard controller
//!
//! Owns the dashboard state and exposes the operator's actions: refresh,
//! open/close the create-edit modal, submit, delete.

use crate::backend::error::BackendError;
use thiserror::Error;

pub mod dashboard;
pub mod state;

pub use dashboard::{DashboardController, DeleteOutcome};
pub use state::{DashboardState, EditTarget, ModalState, Tab};

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The backend reported a failure or could not be reached.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Input was rejected before any remote call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A local file (image or config) could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DashboardError::Validation(msg.into())
    }
}

/// Asks the operator to confirm a destructive action.
#[cfg_attr(test, automock)]
pub trait Confirmation: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Answers yes to every prompt. Used where the caller already asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
