use std::fmt;

use crate::document::Format;

pub const DEFAULT_API_BASE_URL: &str = "https://api.challonge.com/v1/";
pub const API_BASE_URL_VAR: &str = "CHALLONGE_API_BASE_URL";

/// Transport and payload settings of a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub format: Format,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: format!("bracket-api/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            format: Format::Json,
        }
    }
}

impl ClientSettings {
    /// Defaults, with the base URL taken from the environment when set
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(base_url) = std::env::var(API_BASE_URL_VAR) {
            settings.api_base_url = base_url;
        }
        settings
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Account name and developer API key used for HTTP basic auth
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Keeps the key out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ClientSettings::default();
        assert_eq!(settings.api_base_url, "https://api.challonge.com/v1/");
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.format, Format::Json);
        assert!(settings.user_agent.starts_with("bracket-api/"));
    }

    #[test]
    fn test_builder_overrides() {
        let settings = ClientSettings::default().with_format(Format::Xml).with_timeout(5);
        assert_eq!(settings.format, Format::Xml);
        assert_eq!(settings.timeout_secs, 5);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let credentials = Credentials::new("organizer", "s3cr3t");
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("organizer"));
        assert!(!printed.contains("s3cr3t"));
        assert_eq!(credentials.api_key(), "s3cr3t");
    }
}
