//! Application configuration.

use crate::consts::cli_consts::storage::DEFAULT_BUCKET;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Environment variables that take precedence over the config file.
pub const URL_VAR: &str = "CAMPAIGN_ADMIN_URL";
pub const API_KEY_VAR: &str = "CAMPAIGN_ADMIN_API_KEY";
pub const BUCKET_VAR: &str = "CAMPAIGN_ADMIN_BUCKET";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the backend, or `local`.
    pub backend_url: String,
    /// Key sent as `apikey` and bearer token.
    pub api_key: String,
    /// Storage bucket for uploaded images.
    #[serde(default = "default_bucket")]
    pub image_bucket: String,
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

/// Location of the config file: `~/.campaign-admin/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Unable to determine the home directory",
        )
    })?;
    Ok(home_path.join(".campaign-admin").join("config.json"))
}

impl Config {
    /// Create Config with the given backend URL, key and bucket.
    pub fn new(backend_url: String, api_key: String, image_bucket: Option<String>) -> Self {
        Config {
            backend_url,
            api_key,
            image_bucket: image_bucket.unwrap_or_else(default_bucket),
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Resolves the effective configuration: the file at `path` if present,
    /// with environment variables overriding individual fields.
    ///
    /// # Errors
    /// Returns an error if the file is unreadable, or if no backend URL or
    /// API key can be found anywhere.
    pub fn resolve(path: &Path) -> Result<Self, std::io::Error> {
        let from_file = if path.exists() {
            Some(Self::load_from_file(path)?)
        } else {
            None
        };
        Self::merge_overrides(
            from_file,
            std::env::var(URL_VAR).ok(),
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(BUCKET_VAR).ok(),
        )
    }

    fn merge_overrides(
        from_file: Option<Config>,
        url: Option<String>,
        api_key: Option<String>,
        bucket: Option<String>,
    ) -> Result<Self, std::io::Error> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let (file_url, file_key, file_bucket) = match from_file {
            Some(config) => (
                Some(config.backend_url),
                Some(config.api_key),
                Some(config.image_bucket),
            ),
            None => (None, None, None),
        };

        let backend_url = non_empty(url).or(non_empty(file_url));
        let api_key = non_empty(api_key).or(non_empty(file_key));
        match (backend_url, api_key) {
            (Some(backend_url), Some(api_key)) => Ok(Config::new(
                backend_url,
                api_key,
                non_empty(bucket).or(non_empty(file_bucket)),
            )),
            _ => Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!(
                    "No backend configured. Run `campaign-admin configure --url <URL> --api-key <KEY>` or set {} and {}",
                    URL_VAR, API_KEY_VAR
                ),
            )),
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the config file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn sample() -> Config {
        Config::new(
            "https://project.example.co".to_string(),
            "anon-key".to_string(),
            None,
        )
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample();
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
        assert_eq!(loaded_config.image_bucket, "campaign-images");
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = sample().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // A file without a bucket falls back to the default bucket.
    fn test_load_defaults_missing_bucket() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"backend_url":"local","api_key":"k"}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.image_bucket, "campaign-images");
    }

    #[test]
    // Clearing removes the file and tolerates a missing one.
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        sample().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        assert!(Config::clear(&path).is_ok());
    }

    #[test]
    // Environment overrides win over file values, field by field.
    fn test_overrides_take_precedence() {
        let config = Config::merge_overrides(
            Some(sample()),
            Some("local".to_string()),
            None,
            Some("photos".to_string()),
        )
        .unwrap();

        assert_eq!(config.backend_url, "local");
        assert_eq!(config.api_key, "anon-key");
        assert_eq!(config.image_bucket, "photos");
    }

    #[test]
    // Without a file, both URL and key must come from the environment.
    fn test_missing_credentials_is_an_error() {
        let err = Config::merge_overrides(None, Some("local".to_string()), None, None).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("configure"));
    }
}
