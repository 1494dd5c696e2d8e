//! Client configuration.

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001/api";

/// Environment variable that overrides the base URL.
pub const BASE_URL_ENV: &str = "TODO_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `TODO_API_BASE_URL`, falling back to `DEFAULT_BASE_URL` when it
    /// is unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from a user-supplied URL: surrounding whitespace is trimmed and
    /// a blank value means `DEFAULT_BASE_URL`.
    pub fn from_base_url(value: &str) -> Self {
        match value.trim() {
            "" => Self::default(),
            url => Self::new(url),
        }
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup(BASE_URL_ENV)
            .map(|url| Self::from_base_url(&url))
            .unwrap_or_default()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
