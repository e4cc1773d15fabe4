//! Session setup and initialization

use crate::backend::BackendClient;
use crate::config::Config;
use crate::controller::{Confirmation, DashboardController};
use crate::environment::Environment;
use std::error::Error;
use std::path::Path;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Controller wired to the configured backend
    pub controller: DashboardController,
    /// Deployment the controller talks to
    pub environment: Environment,
}

/// Sets up a session against the configured backend
///
/// 1. Resolves the configuration (file plus environment overrides)
/// 2. Parses the backend URL into an `Environment`
/// 3. Builds the HTTP client and the controller around it
///
/// # Arguments
/// * `config_path` - Location of the config file
/// * `confirmation` - How destructive actions get confirmed in this mode
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - Missing or invalid configuration, or the HTTP client could not be built
pub fn setup_session(
    config_path: &Path,
    confirmation: Box<dyn Confirmation>,
) -> Result<SessionData, Box<dyn Error>> {
    let config = Config::resolve(config_path)?;
    let environment = config.backend_url.parse::<Environment>()?;
    log::debug!(
        "Using backend {:?} with bucket {}",
        environment,
        config.image_bucket
    );

    let client = BackendClient::new(environment.clone(), config.api_key, config.image_bucket)?;
    let controller = DashboardController::new(Box::new(client), confirmation);

    Ok(SessionData {
        controller,
        environment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::AssumeYes;

    #[test]
    fn test_setup_rejects_bad_backend_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new("ftp://example.org".to_string(), "key".to_string(), None)
            .save(&path)
            .unwrap();

        let result = setup_session(&path, Box::new(AssumeYes));
        let err = result.err().unwrap();
        assert!(err.to_string().contains("Invalid backend URL"));
    }

    #[test]
    fn test_setup_builds_controller_for_hosted_backend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new(
            "https://demo.example.co/".to_string(),
            "key".to_string(),
            Some("photos".to_string()),
        )
        .save(&path)
        .unwrap();

        let session = setup_session(&path, Box::new(AssumeYes)).unwrap();
        assert_eq!(session.environment.base_url(), "https://demo.example.co");
        assert_eq!(session.controller.environment(), &session.environment);
    }
}
