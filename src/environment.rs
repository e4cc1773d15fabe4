use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Local development stack address used for the `local` keyword.
const LOCAL_URL: &str = "http://127.0.0.1:54321";

/// Represents the backend deployment the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Locally running backend stack.
    #[default]
    Local,
    /// Hosted project reachable at the given base URL.
    Hosted { url: String },
}

impl Environment {
    /// Returns the base URL of the backend, without a trailing slash.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Local => LOCAL_URL.to_string(),
            Environment::Hosted { url } => url.trim_end_matches('/').to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Hosted {
                url: trimmed.to_string(),
            });
        }
        Err(format!(
            "Invalid backend URL '{}': expected 'local' or an http(s) URL",
            trimmed
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Hosted { .. } => write!(f, "Hosted"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "https://abc.example.co/".parse::<Environment>().unwrap().base_url(),
            "https://abc.example.co"
        );
        assert!("ftp://nope".parse::<Environment>().is_err());
    }
}
